//! Page-level state machines shared by the front-ends.
//!
//! Each data page starts in [`Load::Loading`] and settles once its request
//! completes. Forms and the delete flow track their own in-flight phase so a
//! page never has two writes for the same post outstanding.

mod auth;
mod detail;
mod form;
mod home;

pub use auth::{LoginForm, RegisterForm, authenticate, register};
pub use detail::{DeleteFlow, can_manage, delete_confirmed};
pub use form::{FormPhase, PostForm, open_for_edit, submit_create, submit_update};
pub use home::{HomeView, posts_by_author};

use crate::error::BlogClientError;
use crate::model::Notice;
use crate::routes::AppRoute;

#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn from_result(result: Result<T, BlogClientError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.user_message()),
        }
    }

    /// State of a request that may still be running (`None`).
    pub fn from_pending(pending: Option<&Result<T, BlogClientError>>) -> Self
    where
        T: Clone,
    {
        match pending {
            None => Self::Loading,
            Some(result) => Self::from_result(result.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// What a page does after an operation settles: show a notice, then
/// optionally move somewhere else once it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    pub navigate: Option<AppRoute>,
}

impl Outcome {
    pub fn stay(notice: Notice) -> Self {
        Self { notice, navigate: None }
    }

    pub fn then(notice: Notice, route: AppRoute) -> Self {
        Self {
            notice,
            navigate: Some(route),
        }
    }

    pub fn failed(title: &str, err: &BlogClientError) -> Self {
        Self::stay(err.notice(title))
    }

    /// Whether the page is done once the notice is dismissed.
    pub fn leaves_page(&self) -> bool {
        self.navigate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_result() {
        let ok: Load<u32> = Load::from_result(Ok(3));
        assert_eq!(ok.ready(), Some(&3));
        assert!(!ok.is_loading());

        let failed: Load<u32> = Load::from_result(Err(BlogClientError::from_response(404, r#"{"message":"Post not found"}"#)));
        assert_eq!(failed, Load::Failed("Post not found".into()));
        assert!(failed.ready().is_none());
    }

    #[test]
    fn pending_request_is_loading_until_settled() {
        let running: Load<u32> = Load::from_pending(None);
        assert!(running.is_loading());

        let done = Ok(7);
        assert_eq!(Load::from_pending(Some(&done)), Load::Ready(7));

        let failed: Result<u32, _> = Err(BlogClientError::transport("offline"));
        assert_eq!(Load::from_pending(Some(&failed)), Load::Failed("Request failed: offline".into()));
    }
}
