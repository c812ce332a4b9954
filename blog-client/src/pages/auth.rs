use super::Outcome;
use crate::api::BlogApi;
use crate::error::BlogClientError;
use crate::model::{Notice, Session};
use crate::routes::AppRoute;

pub const EMPTY_CREDENTIALS: &str = "Username or Password cannot be empty!";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), BlogClientError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(BlogClientError::validation(EMPTY_CREDENTIALS));
        }
        Ok(())
    }

    pub fn welcome(session: &Session) -> Outcome {
        Outcome::then(
            Notice::success("Success", format!("Welcome back, {}!", session.username)),
            AppRoute::Home,
        )
    }

    /// Outcome once the session has been handed to the store. A session that
    /// could not be persisted still works, but the user is told it will not
    /// survive a reload.
    pub fn signed_in(session: &Session, persisted: Result<(), BlogClientError>) -> Outcome {
        match persisted {
            Ok(()) => Self::welcome(session),
            Err(err) => Outcome::then(
                Notice::warning(
                    "Logged in",
                    format!(
                        "Welcome back, {}! Your session could not be saved ({}), so you will need to log in again after a reload.",
                        session.username,
                        err.user_message()
                    ),
                ),
                AppRoute::Home,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), BlogClientError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(BlogClientError::validation(EMPTY_CREDENTIALS));
        }
        if self.password != self.confirm_password {
            return Err(BlogClientError::validation(PASSWORD_MISMATCH));
        }
        Ok(())
    }
}

/// Validates and runs the login exchange. Storing the returned session is
/// left to the caller's session store.
pub async fn authenticate<A: BlogApi + ?Sized>(
    form: &LoginForm,
    api: &A,
) -> Result<Session, BlogClientError> {
    form.validate()?;
    api.login(form.username.trim().to_string(), form.password.clone())
        .await
}

/// Validates and registers; success moves on to the login page.
pub async fn register<A: BlogApi + ?Sized>(
    form: &RegisterForm,
    api: &A,
) -> Result<Outcome, BlogClientError> {
    form.validate()?;
    let message = api
        .register(form.username.trim().to_string(), form.password.clone())
        .await?;
    let message = if message.trim().is_empty() {
        "Registration successful".to_string()
    } else {
        message
    };
    Ok(Outcome::then(Notice::success("Success", message), AppRoute::Login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockApi, session_for};
    use crate::model::NoticeKind;
    use crate::session::{MemoryStorage, SessionStore};

    fn login(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_api() {
        let api = MockApi::new();
        for form in [login("", "pw"), login("alice", ""), login("   ", "pw")] {
            let err = authenticate(&form, &api).await.unwrap_err();
            assert_eq!(err.user_message(), EMPTY_CREDENTIALS);
        }
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn successful_login_fills_the_session_store() {
        let api = MockApi::new();
        let mut store = SessionStore::init(MemoryStorage::new());

        let session = authenticate(&login(" alice ", "pw"), &api).await.unwrap();
        let outcome = LoginForm::welcome(&session);
        store.log_in(session).unwrap();

        assert_eq!(api.calls(), vec![Call::Login("alice".into())]);
        assert_eq!(store.user_info().map(|s| s.username.as_str()), Some("alice"));
        assert_eq!(outcome.navigate, Some(AppRoute::Home));
    }

    #[tokio::test]
    async fn rejected_login_leaves_store_empty() {
        let api = MockApi::failing(BlogClientError::from_response(
            401,
            r#"{"message":"Invalid password"}"#,
        ));
        let store = SessionStore::init(MemoryStorage::new());

        let err = authenticate(&login("alice", "nope"), &api).await.unwrap_err();

        assert_eq!(err.user_message(), "Invalid password");
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unsaved_session_is_reported_not_hidden() {
        let session = session_for("alice");

        let saved = LoginForm::signed_in(&session, Ok(()));
        assert_eq!(saved, LoginForm::welcome(&session));

        let unsaved = LoginForm::signed_in(&session, Err(BlogClientError::Storage("quota exceeded".into())));
        assert_eq!(unsaved.notice.kind, NoticeKind::Warning);
        assert!(unsaved.notice.text.contains("quota exceeded"));
        assert_eq!(unsaved.navigate, Some(AppRoute::Home));
    }

    #[tokio::test]
    async fn password_mismatch_is_caught_locally() {
        let api = MockApi::new();
        let form = RegisterForm {
            username: "alice".into(),
            password: "one".into(),
            confirm_password: "two".into(),
        };

        let err = register(&form, &api).await.unwrap_err();

        assert_eq!(err.user_message(), PASSWORD_MISMATCH);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn registration_leads_to_login_with_server_message() {
        let api = MockApi::new();
        let form = RegisterForm {
            username: "alice".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        };

        let outcome = register(&form, &api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Register("alice".into())]);
        assert_eq!(outcome.navigate, Some(AppRoute::Login));
        assert_eq!(outcome.notice.text, "User registered successfully");
    }
}
