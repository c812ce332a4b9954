//! Recording stand-in for the blog API used by unit tests.

use crate::api::BlogApi;
use crate::error::BlogClientError;
use crate::model::{Author, NewPost, Post, PostUpdate, Session};
use async_trait::async_trait;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    Register(String),
    List,
    Get(String),
    Create(NewPost),
    Update(String, PostUpdate),
    Delete(String),
}

#[derive(Default)]
pub struct MockApi {
    calls: RefCell<Vec<Call>>,
    posts: Vec<Post>,
    fail_with: Option<BlogClientError>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn failing(err: BlogClientError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), BlogClientError> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn session_for(username: &str) -> Session {
    Session {
        id: format!("id-{username}"),
        username: username.to_string(),
        access_token: format!("token-{username}"),
    }
}

pub fn post_by(id: &str, username: &str) -> Post {
    Post {
        id: id.to_string(),
        title: format!("Post {id}"),
        summary: String::new(),
        content: "<p>body</p>".to_string(),
        cover: None,
        author: Some(Author {
            id: format!("id-{username}"),
            username: username.to_string(),
        }),
        created_at: None,
    }
}

#[async_trait(?Send)]
impl BlogApi for MockApi {
    async fn login(&self, username: String, _password: String) -> Result<Session, BlogClientError> {
        self.record(Call::Login(username.clone()))?;
        Ok(session_for(&username))
    }

    async fn register(&self, username: String, _password: String) -> Result<String, BlogClientError> {
        self.record(Call::Register(username))?;
        Ok("User registered successfully".to_string())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        self.record(Call::List)?;
        Ok(self.posts.clone())
    }

    async fn get_post(&self, id: &str) -> Result<Post, BlogClientError> {
        self.record(Call::Get(id.to_string()))?;
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| BlogClientError::from_response(404, r#"{"message":"Post not found"}"#))
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, BlogClientError> {
        self.record(Call::Create(post.clone()))?;
        let mut created = post_by("new", "me");
        created.title = post.title;
        created.content = post.content;
        Ok(created)
    }

    async fn update_post(&self, id: &str, update: PostUpdate) -> Result<Post, BlogClientError> {
        self.record(Call::Update(id.to_string(), update.clone()))?;
        let mut updated = post_by(id, "me");
        updated.title = update.title;
        Ok(updated)
    }

    async fn delete_post(&self, id: &str) -> Result<(), BlogClientError> {
        self.record(Call::Delete(id.to_string()))
    }
}
