use crate::error::BlogClientError;
use crate::model::{NewPost, Post, PostUpdate, Session};
use async_trait::async_trait;

/// The remote blog API as seen by a front-end.
///
/// Write calls carry the access token the client was built with; the server
/// is the one that decides whether the caller may touch a post.
#[async_trait(?Send)]
pub trait BlogApi {
    async fn login(&self, username: String, password: String) -> Result<Session, BlogClientError>;
    /// Returns the confirmation message sent by the server.
    async fn register(&self, username: String, password: String) -> Result<String, BlogClientError>;
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError>;
    async fn get_post(&self, id: &str) -> Result<Post, BlogClientError>;
    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError>;
    async fn update_post(&self, id: &str, update: PostUpdate) -> Result<Post, BlogClientError>;
    async fn delete_post(&self, id: &str) -> Result<(), BlogClientError>;
}

/// Body of responses that only carry a human-readable message.
#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
