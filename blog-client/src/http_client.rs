use crate::api::{BlogApi, MessageResponse};
use crate::config::ClientConfig;
use crate::error::BlogClientError;
use crate::model::{NewPost, Post, PostUpdate, Session};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Native HTTP client for the blog API.
#[derive(Clone)]
pub struct BlogClientHttp {
    client: Client,
    config: ClientConfig,
    token: Option<String>,
}

impl From<reqwest::Error> for BlogClientError {
    fn from(err: reqwest::Error) -> Self {
        BlogClientError::transport(err)
    }
}

impl BlogClientHttp {
    pub fn connect(config: ClientConfig) -> Result<Self, BlogClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            config,
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, BlogClientError> {
        match &self.token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Err(BlogClientError::Unauthorized),
        }
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BlogClientError> {
        let response = Self::send_raw(request).await?;
        Ok(response.json().await?)
    }

    async fn send_raw(request: RequestBuilder) -> Result<reqwest::Response, BlogClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = BlogClientError::from_response(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), error = %err, "blog api request failed");
        Err(err)
    }
}

#[async_trait(?Send)]
impl BlogApi for BlogClientHttp {
    async fn login(&self, username: String, password: String) -> Result<Session, BlogClientError> {
        tracing::debug!(%username, "logging in");
        let request = self.client.post(self.config.login_url()).json(&json!({
            "username": username,
            "password": password,
        }));
        Self::send(request).await
    }

    async fn register(&self, username: String, password: String) -> Result<String, BlogClientError> {
        tracing::debug!(%username, "registering");
        let request = self.client.post(self.config.register_url()).json(&json!({
            "username": username,
            "password": password,
        }));
        let body: MessageResponse = Self::send(request).await?;
        Ok(body.message)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        Self::send(self.client.get(self.config.posts_url())).await
    }

    async fn get_post(&self, id: &str) -> Result<Post, BlogClientError> {
        Self::send(self.client.get(self.config.post_url(id))).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        let mut form = Form::new()
            .text("title", post.title)
            .text("summary", post.summary)
            .text("content", post.content);

        if let Some(cover) = post.cover {
            let part = Part::bytes(cover.bytes)
                .file_name(cover.name)
                .mime_str(&cover.content_type)?;
            form = form.part("file", part);
        }

        let request = self.authorized(self.client.post(self.config.posts_url()))?;
        Self::send(request.multipart(form)).await
    }

    async fn update_post(&self, id: &str, update: PostUpdate) -> Result<Post, BlogClientError> {
        let request = self.authorized(self.client.put(self.config.post_url(id)))?;
        Self::send(request.json(&update)).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), BlogClientError> {
        let request = self.authorized(self.client.delete(self.config.post_url(id)))?;
        Self::send_raw(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_without_token_fail_before_sending() {
        // Nothing listens here; an attempted request would surface as a transport error.
        let client = BlogClientHttp::connect(ClientConfig::new("http://127.0.0.1:9")).unwrap();

        let err = client.delete_post("p1").await.unwrap_err();
        assert_eq!(err, BlogClientError::Unauthorized);

        let err = client
            .update_post(
                "p1",
                PostUpdate {
                    title: "t".into(),
                    summary: String::new(),
                    content: "c".into(),
                    cover: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, BlogClientError::Unauthorized);
    }

    #[test]
    fn empty_token_counts_as_none() {
        let client = BlogClientHttp::connect(ClientConfig::default())
            .unwrap()
            .with_token(Some(String::new()));
        assert!(client.token.is_none());
    }
}
