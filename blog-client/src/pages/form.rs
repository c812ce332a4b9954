use super::Outcome;
use crate::api::BlogApi;
use crate::error::BlogClientError;
use crate::model::{Cover, NewPost, Notice, Post, PostDraft, PostUpdate, Session};
use crate::routes::AppRoute;

pub const MISSING_FIELDS: &str = "Title and content are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Create/edit form: the draft plus whether a write is in flight.
///
/// A failed submit hands the draft back untouched; only a successful one
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostForm {
    pub draft: PostDraft,
    phase: FormPhase,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_post(post: &Post) -> Self {
        Self {
            draft: PostDraft::from_post(post),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn reset(&mut self) {
        self.draft = PostDraft::default();
    }

    pub fn begin_create(&mut self) -> Result<NewPost, BlogClientError> {
        self.begin()?;
        let cover = match &self.draft.cover {
            Cover::Upload(file) => Some(file.clone()),
            Cover::Url(_) | Cover::None => None,
        };
        Ok(NewPost {
            title: self.draft.title.trim().to_string(),
            summary: self.draft.summary.trim().to_string(),
            content: self.draft.content.clone(),
            cover,
        })
    }

    pub fn begin_update(&mut self) -> Result<PostUpdate, BlogClientError> {
        self.begin()?;
        let cover = match &self.draft.cover {
            Cover::Url(url) => Some(url.trim().to_string()),
            Cover::Upload(_) | Cover::None => None,
        };
        Ok(PostUpdate {
            title: self.draft.title.trim().to_string(),
            summary: self.draft.summary.trim().to_string(),
            content: self.draft.content.clone(),
            cover,
        })
    }

    pub fn finish_create(&mut self, result: Result<Post, BlogClientError>) -> Outcome {
        self.phase = FormPhase::Editing;
        match result {
            Ok(post) => {
                tracing::info!(%post, "post created");
                self.reset();
                Outcome::then(
                    Notice::success("Success!", "Post created successfully"),
                    AppRoute::Home,
                )
            }
            Err(err) => Outcome::failed("Error", &err),
        }
    }

    pub fn finish_update(&mut self, id: &str, result: Result<Post, BlogClientError>) -> Outcome {
        self.phase = FormPhase::Editing;
        match result {
            Ok(_) => {
                tracing::info!(%id, "post updated");
                self.reset();
                Outcome::then(
                    Notice::success("Success", "Post updated successfully"),
                    AppRoute::PostDetail { id: id.to_string() },
                )
            }
            Err(err) => Outcome::failed("Error", &err),
        }
    }

    fn begin(&mut self) -> Result<(), BlogClientError> {
        if self.is_submitting() {
            return Err(BlogClientError::Busy);
        }
        if self.draft.title.trim().is_empty() || is_blank_markup(&self.draft.content) {
            return Err(BlogClientError::validation(MISSING_FIELDS));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }
}

/// Turns a fetched post into an editable form, unless the session does not
/// own it. The refusal mirrors the API's own check for a nicer UX; it is not
/// what protects the post.
pub fn open_for_edit(post: &Post, session: Option<&Session>) -> Result<PostForm, Outcome> {
    if !post.is_owned_by(session) {
        tracing::warn!(%post, "refusing to edit a post owned by someone else");
        return Err(Outcome::then(
            BlogClientError::NotOwner.notice("Error"),
            AppRoute::Home,
        ));
    }
    Ok(PostForm::from_post(post))
}

pub async fn submit_create<A: BlogApi + ?Sized>(form: &mut PostForm, api: &A) -> Outcome {
    match form.begin_create() {
        Ok(payload) => {
            let result = api.create_post(payload).await;
            form.finish_create(result)
        }
        Err(err) => Outcome::failed("Error", &err),
    }
}

pub async fn submit_update<A: BlogApi + ?Sized>(form: &mut PostForm, id: &str, api: &A) -> Outcome {
    match form.begin_update() {
        Ok(payload) => {
            let result = api.update_post(id, payload).await;
            form.finish_update(id, result)
        }
        Err(err) => Outcome::failed("Error", &err),
    }
}

/// Markup an empty rich-text editor leaves behind.
const EMPTY_EDITOR_MARKUP: [&str; 6] = ["<p>", "</p>", "<br>", "<br/>", "<br />", "&nbsp;"];

/// True when `html` is whitespace or an empty editor's `<p><br></p>`. Any
/// other markup counts as content.
fn is_blank_markup(html: &str) -> bool {
    let mut rest = html.to_ascii_lowercase();
    for token in EMPTY_EDITOR_MARKUP {
        rest = rest.replace(token, " ");
    }
    rest.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, MockApi, post_by, session_for};
    use crate::model::{CoverFile, NoticeKind};

    fn filled_form() -> PostForm {
        let mut form = PostForm::new();
        form.draft.title = "  Hello  ".into();
        form.draft.summary = "short".into();
        form.draft.content = "<p>World</p>".into();
        form.draft.cover = Cover::Upload(CoverFile {
            name: "cover.png".into(),
            content_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        });
        form
    }

    #[tokio::test]
    async fn create_sends_exactly_one_request_and_resets() {
        let api = MockApi::new();
        let mut form = filled_form();

        let outcome = submit_create(&mut form, &api).await;

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Create(payload) => {
                assert_eq!(payload.title, "Hello");
                assert_eq!(payload.cover.as_ref().map(|c| c.name.as_str()), Some("cover.png"));
            }
            other => panic!("unexpected call {other:?}"),
        }
        assert_eq!(outcome.navigate, Some(AppRoute::Home));
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(form.draft, PostDraft::default());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn create_failure_keeps_draft_and_shows_server_message() {
        let api = MockApi::failing(BlogClientError::from_response(
            400,
            r#"{"message":"Cover is too large"}"#,
        ));
        let mut form = filled_form();
        let before = form.draft.clone();

        let outcome = submit_create(&mut form, &api).await;

        assert_eq!(api.calls().len(), 1);
        assert_eq!(form.draft, before);
        assert!(!form.is_submitting());
        assert_eq!(outcome.navigate, None);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert_eq!(outcome.notice.text, "Cover is too large");
    }

    #[tokio::test]
    async fn missing_title_or_content_sends_nothing() {
        let api = MockApi::new();

        let mut no_title = filled_form();
        no_title.draft.title = "   ".into();
        let outcome = submit_create(&mut no_title, &api).await;
        assert_eq!(outcome.notice.text, MISSING_FIELDS);

        let mut empty_editor = filled_form();
        empty_editor.draft.content = "<p><br></p>".into();
        let outcome = submit_create(&mut empty_editor, &api).await;
        assert_eq!(outcome.notice.text, MISSING_FIELDS);

        assert!(api.calls().is_empty());
        assert_eq!(empty_editor.phase(), FormPhase::Editing);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        assert!(form.begin_create().is_ok());
        assert_eq!(form.begin_create(), Err(BlogClientError::Busy));

        let outcome = form.finish_create(Err(BlogClientError::transport("offline")));
        assert_eq!(outcome.notice.text, "Request failed: offline");
        assert!(form.begin_create().is_ok());
    }

    #[test]
    fn reset_clears_the_draft() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form.draft, PostDraft::default());
    }

    #[test]
    fn edit_of_foreign_post_never_yields_a_form() {
        let post = post_by("p1", "alice");
        let bob = session_for("bob");

        let rejected = open_for_edit(&post, Some(&bob)).unwrap_err();
        assert_eq!(rejected.navigate, Some(AppRoute::Home));
        assert_eq!(rejected.notice.kind, NoticeKind::Error);
        assert_eq!(rejected.notice.text, "You are not allowed to edit this post");

        assert!(open_for_edit(&post, None).is_err());
    }

    #[tokio::test]
    async fn owner_edits_and_lands_on_the_post() {
        let mut post = post_by("p1", "alice");
        post.cover = Some("http://img/old.png".into());
        let alice = session_for("alice");
        let api = MockApi::new();

        let mut form = open_for_edit(&post, Some(&alice)).unwrap();
        assert_eq!(form.draft.title, "Post p1");
        form.draft.title = "Renamed".into();
        form.draft.cover = Cover::Url(" http://img/new.png ".into());

        let outcome = submit_update(&mut form, "p1", &api).await;

        match api.calls().as_slice() {
            [Call::Update(id, update)] => {
                assert_eq!(id, "p1");
                assert_eq!(update.title, "Renamed");
                assert_eq!(update.cover.as_deref(), Some("http://img/new.png"));
            }
            other => panic!("unexpected calls {other:?}"),
        }
        assert_eq!(outcome.navigate, Some(AppRoute::PostDetail { id: "p1".into() }));
    }

    #[tokio::test]
    async fn fetched_post_opens_only_for_its_author() {
        let api = MockApi::with_posts(vec![post_by("p1", "alice")]);

        let post = api.get_post("p1").await.unwrap();
        let form = open_for_edit(&post, Some(&session_for("alice"))).unwrap();
        assert_eq!(form.draft.title, "Post p1");
        assert!(open_for_edit(&post, Some(&session_for("bob"))).is_err());

        let missing = api.get_post("nope").await.unwrap_err();
        assert_eq!(missing.user_message(), "Post not found");
        assert_eq!(api.calls(), vec![Call::Get("p1".into()), Call::Get("nope".into())]);
    }

    #[tokio::test]
    async fn saved_edit_form_is_spent_but_failed_one_stays() {
        let api = MockApi::new();
        let mut form = PostForm::from_post(&post_by("p1", "alice"));

        let outcome = submit_update(&mut form, "p1", &api).await;
        assert!(outcome.leaves_page());
        assert_eq!(form.draft, PostDraft::default());

        let api = MockApi::failing(BlogClientError::transport("offline"));
        let mut form = PostForm::from_post(&post_by("p1", "alice"));
        let outcome = submit_update(&mut form, "p1", &api).await;
        assert!(!outcome.leaves_page());
        assert_eq!(form.draft.title, "Post p1");
    }

    #[tokio::test]
    async fn update_failure_keeps_edits() {
        let api = MockApi::failing(BlogClientError::from_response(403, r#"{"message":"Forbidden"}"#));
        let mut form = PostForm::from_post(&post_by("p1", "alice"));
        form.draft.content = "<p>changed</p>".into();

        let outcome = submit_update(&mut form, "p1", &api).await;

        assert_eq!(form.draft.content, "<p>changed</p>");
        assert_eq!(outcome.notice.text, "Forbidden");
        assert_eq!(outcome.navigate, None);
    }

    #[test]
    fn blank_markup_detection() {
        assert!(is_blank_markup(""));
        assert!(is_blank_markup("<p><br></p>"));
        assert!(is_blank_markup("<p>&nbsp;</p>"));
        assert!(!is_blank_markup("<p>hi</p>"));
        assert!(!is_blank_markup(r#"<p><img src="x.png"></p>"#));
        assert!(!is_blank_markup("<3 rust"));
        assert!(!is_blank_markup(r#"<iframe src="https://v.example/1"></iframe>"#));
        assert!(!is_blank_markup(r#"<video src="clip.mp4"></video>"#));
    }

    #[tokio::test]
    async fn embedded_media_and_bare_angle_brackets_are_content() {
        let api = MockApi::new();
        for content in ["<3 rust", r#"<iframe src="https://v.example/1"></iframe>"#] {
            let mut form = PostForm::new();
            form.draft.title = "T".into();
            form.draft.content = content.into();

            let outcome = submit_create(&mut form, &api).await;
            assert_eq!(outcome.notice.kind, NoticeKind::Success, "{content}");
        }
        assert_eq!(api.calls().len(), 2);
    }
}
