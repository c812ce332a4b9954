use super::Outcome;
use crate::api::BlogApi;
use crate::error::BlogClientError;
use crate::model::{Notice, Post, Session};
use crate::routes::AppRoute;

/// Whether the Edit and Delete buttons are shown for `post`.
pub fn can_manage(post: &Post, session: Option<&Session>) -> bool {
    post.is_owned_by(session)
}

/// Confirm-then-delete protocol of the post detail page.
///
/// A delete request may only go out after the user has confirmed the
/// interstitial; declining puts the flow back where it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

impl DeleteFlow {
    pub fn prompt() -> Notice {
        Notice::warning("Are you sure?", "You won't be able to revert this!")
    }

    pub fn request(&mut self) {
        if *self == Self::Idle {
            *self = Self::Confirming;
        }
    }

    pub fn decline(&mut self) {
        if *self == Self::Confirming {
            *self = Self::Idle;
        }
    }

    /// Moves to `Deleting`. Returns false unless a confirmation was pending.
    pub fn confirm(&mut self) -> bool {
        if *self == Self::Confirming {
            *self = Self::Deleting;
            return true;
        }
        false
    }

    pub fn is_confirming(&self) -> bool {
        *self == Self::Confirming
    }

    pub fn finish(&mut self, result: Result<(), BlogClientError>) -> Outcome {
        *self = Self::Idle;
        match result {
            Ok(()) => Outcome::then(
                Notice::success("Deleted!", "Your post has been deleted."),
                AppRoute::Home,
            ),
            Err(err) => Outcome::failed("Error", &err),
        }
    }
}

/// Confirms and issues the delete. Yields nothing, and sends nothing, when no
/// confirmation was pending.
pub async fn delete_confirmed<A: BlogApi + ?Sized>(
    flow: &mut DeleteFlow,
    id: &str,
    api: &A,
) -> Option<Outcome> {
    if !flow.confirm() {
        return None;
    }
    let result = api.delete_post(id).await;
    Some(flow.finish(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockApi, post_by, session_for};
    use crate::model::NoticeKind;

    #[test]
    fn only_the_author_sees_manage_buttons() {
        let post = post_by("p1", "alice");
        assert!(can_manage(&post, Some(&session_for("alice"))));
        assert!(!can_manage(&post, Some(&session_for("bob"))));
        assert!(!can_manage(&post, None));
    }

    #[tokio::test]
    async fn declining_sends_no_request() {
        let api = MockApi::new();
        let mut flow = DeleteFlow::default();

        flow.request();
        assert!(flow.is_confirming());
        flow.decline();

        assert_eq!(flow, DeleteFlow::Idle);
        assert_eq!(delete_confirmed(&mut flow, "p1", &api).await, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_goes_home() {
        let api = MockApi::new();
        let mut flow = DeleteFlow::default();

        flow.request();
        let outcome = delete_confirmed(&mut flow, "p1", &api).await.unwrap();

        assert_eq!(api.calls(), vec![Call::Delete("p1".into())]);
        assert_eq!(outcome.navigate, Some(AppRoute::Home));
        assert_eq!(outcome.notice.title, "Deleted!");
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[tokio::test]
    async fn failed_delete_stays_on_page() {
        let api = MockApi::failing(BlogClientError::from_response(403, r#"{"message":"Not your post"}"#));
        let mut flow = DeleteFlow::default();

        flow.request();
        let outcome = delete_confirmed(&mut flow, "p1", &api).await.unwrap();

        assert_eq!(outcome.navigate, None);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert_eq!(outcome.notice.text, "Not your post");
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn confirm_is_single_shot() {
        let mut flow = DeleteFlow::default();
        assert!(!flow.confirm());
        flow.request();
        assert!(flow.confirm());
        assert!(!flow.confirm());
        flow.request();
        assert_eq!(flow, DeleteFlow::Deleting);
    }
}
