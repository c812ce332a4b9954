use crate::model::Notice;
use thiserror::Error;

pub const GENERIC_REQUEST_ERROR: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogClientError {
    #[error("{0}")]
    Validation(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("You are not allowed to edit this post")]
    NotOwner,
    #[error("You must be logged in")]
    Unauthorized,
    #[error("Another request is still in progress")]
    Busy,
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl BlogClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Builds an HTTP error from a failed response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: server_message(body),
        }
    }

    /// Text shown to the user: the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Http { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Http { status, .. } => format!("{GENERIC_REQUEST_ERROR} with status code {status}"),
            other => other.to_string(),
        }
    }

    pub fn notice(&self, title: &str) -> Notice {
        Notice::error(title, self.user_message())
    }
}

/// Pulls `message` (or `error`) out of a JSON error body, falling back to the
/// raw text.
pub fn server_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = map.get(key) {
                return text.clone();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoticeKind;

    #[test]
    fn prefers_server_message_field() {
        let err = BlogClientError::from_response(400, r#"{"message":"Title is taken"}"#);
        assert_eq!(err.user_message(), "Title is taken");
    }

    #[test]
    fn falls_back_to_error_field_then_raw_body() {
        let err = BlogClientError::from_response(401, r#"{"error":"unauthorized"}"#);
        assert_eq!(err.user_message(), "unauthorized");

        let err = BlogClientError::from_response(502, " Bad Gateway ");
        assert_eq!(err.user_message(), "Bad Gateway");
    }

    #[test]
    fn empty_body_uses_generic_message() {
        let err = BlogClientError::from_response(500, "");
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[test]
    fn transport_error_is_generic() {
        let err = BlogClientError::transport("connection refused");
        assert_eq!(err.user_message(), "Request failed: connection refused");
    }

    #[test]
    fn notice_carries_user_message() {
        let notice = BlogClientError::validation("Passwords do not match!").notice("Error");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.text, "Passwords do not match!");
    }
}
