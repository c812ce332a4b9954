use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity handed back by a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub username: String,
    pub access_token: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
}

impl Author {
    /// Upper-cased first letter of the username, used for avatars.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {} }}", id, title)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Whether `session` belongs to the author of this post.
    ///
    /// Only a UI hint; the API decides who may actually write.
    pub fn is_owned_by(&self, session: Option<&Session>) -> bool {
        match (&self.author, session) {
            (Some(author), Some(session)) => author.id == session.id,
            _ => false,
        }
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.username.as_str())
    }

    pub fn created_label(&self) -> Option<String> {
        self.created_at.map(|ts| ts.format("%-d %b %Y").to_string())
    }

    pub fn cover_url(&self) -> Option<&str> {
        self.cover.as_deref().filter(|c| !c.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CoverFile {
    /// Wraps picked file bytes, guessing the MIME type from the extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = image_content_type(&name).to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }
}

fn image_content_type(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Cover image as entered in a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cover {
    #[default]
    None,
    /// Freshly picked file, uploaded with a create request.
    Upload(CoverFile),
    /// Existing image reference, edited as text on the edit form.
    Url(String),
}

/// Unsaved form contents of the create and edit pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Cover,
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            summary: post.summary.clone(),
            content: post.content.clone(),
            cover: Cover::Url(post.cover.clone().unwrap_or_default()),
        }
    }
}

/// Multipart payload of a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover: Option<CoverFile>,
}

/// JSON payload of an update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub summary: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// Blocking notification shown until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, text)
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, text)
    }

    fn new(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }
}
