use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use inkwell_client::api::MessageResponse;
use inkwell_client::{BlogApi, BlogClientError, ClientConfig, NewPost, Post, PostUpdate, Session};
use serde_json::json;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

const API_URL: Option<&str> = option_env!("BLOG_API_URL");

pub fn api_config() -> ClientConfig {
    API_URL.map(ClientConfig::new).unwrap_or_default()
}

/// Browser implementation of [`BlogApi`] on top of `fetch`.
#[derive(Clone)]
pub struct BlogClientWeb {
    config: ClientConfig,
    token: Option<String>,
}

impl BlogClientWeb {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, BlogClientError> {
        match &self.token {
            Some(token) => Ok(builder.header("Authorization", &format!("Bearer {token}"))),
            None => Err(BlogClientError::Unauthorized),
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(request: Request) -> Result<T, BlogClientError> {
        let response = Self::send_raw(request).await?;
        response.json().await.map_err(BlogClientError::transport)
    }

    async fn send_raw(request: Request) -> Result<Response, BlogClientError> {
        let response = request.send().await.map_err(BlogClientError::transport)?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let err = BlogClientError::from_response(status, &text);
        tracing::warn!(status, error = %err, "blog api request failed");
        Err(err)
    }
}

fn js_error(err: JsValue) -> BlogClientError {
    BlogClientError::transport(format!("{err:?}"))
}

fn multipart(post: &NewPost) -> Result<FormData, BlogClientError> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_str("title", &post.title).map_err(js_error)?;
    form.append_with_str("summary", &post.summary).map_err(js_error)?;
    form.append_with_str("content", &post.content).map_err(js_error)?;

    if let Some(cover) = &post.cover {
        let bytes = js_sys::Uint8Array::from(cover.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&cover.content_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        form.append_with_blob_and_filename("file", &blob, &cover.name)
            .map_err(js_error)?;
    }

    Ok(form)
}

#[async_trait(?Send)]
impl BlogApi for BlogClientWeb {
    async fn login(&self, username: String, password: String) -> Result<Session, BlogClientError> {
        let body = json!({
            "username": username,
            "password": password,
        });
        let request = Request::post(&self.config.login_url())
            .json(&body)
            .map_err(BlogClientError::transport)?;
        Self::send(request).await
    }

    async fn register(&self, username: String, password: String) -> Result<String, BlogClientError> {
        let body = json!({
            "username": username,
            "password": password,
        });
        let request = Request::post(&self.config.register_url())
            .json(&body)
            .map_err(BlogClientError::transport)?;
        let response: MessageResponse = Self::send(request).await?;
        Ok(response.message)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let request = Request::get(&self.config.posts_url())
            .header("Accept", "application/json")
            .build()
            .map_err(BlogClientError::transport)?;
        Self::send(request).await
    }

    async fn get_post(&self, id: &str) -> Result<Post, BlogClientError> {
        let request = Request::get(&self.config.post_url(id))
            .header("Accept", "application/json")
            .build()
            .map_err(BlogClientError::transport)?;
        Self::send(request).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        // The browser fills in the multipart boundary, so no Content-Type here.
        let request = self
            .authorized(Request::post(&self.config.posts_url()))?
            .body(multipart(&post)?)
            .map_err(BlogClientError::transport)?;
        Self::send(request).await
    }

    async fn update_post(&self, id: &str, update: PostUpdate) -> Result<Post, BlogClientError> {
        let request = self
            .authorized(Request::put(&self.config.post_url(id)))?
            .json(&update)
            .map_err(BlogClientError::transport)?;
        Self::send(request).await
    }

    async fn delete_post(&self, id: &str) -> Result<(), BlogClientError> {
        let request = self
            .authorized(Request::delete(&self.config.post_url(id)))?
            .build()
            .map_err(BlogClientError::transport)?;
        Self::send_raw(request).await?;
        Ok(())
    }
}
