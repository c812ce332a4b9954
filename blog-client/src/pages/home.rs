use crate::model::Post;
use std::collections::HashSet;

/// Posts as returned by the list endpoint, in the same order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeView {
    posts: Vec<Post>,
}

impl HomeView {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn count(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of unique author usernames. Posts without an author share one
    /// bucket.
    pub fn distinct_authors(&self) -> usize {
        self.posts
            .iter()
            .map(Post::author_name)
            .collect::<HashSet<_>>()
            .len()
    }
}

pub fn posts_by_author(posts: &[Post], author_id: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.author.as_ref().is_some_and(|a| a.id == author_id))
        .cloned()
        .collect()
}
