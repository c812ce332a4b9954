//! Route table and the guard in front of protected pages.
//!
//! The guard only decides what the browser shows. It keeps logged-out users
//! from seeing a flash of the create/edit forms, nothing more: every write is
//! authorized again by the API using the session's access token.

use crate::model::Session;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    PostDetail { id: String },
    Create,
    Edit { id: String },
    Login,
    Register,
    AuthorPosts { id: String },
    NotFound { path: String },
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        let path_only = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["create"] => Self::Create,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["post", id] => Self::PostDetail { id: id.to_string() },
            ["edit", id] => Self::Edit { id: id.to_string() },
            ["author", id] => Self::AuthorPosts { id: id.to_string() },
            _ => Self::NotFound {
                path: path_only.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::PostDetail { id } => format!("/post/{id}"),
            Self::Create => "/create".to_string(),
            Self::Edit { id } => format!("/edit/{id}"),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::AuthorPosts { id } => format!("/author/{id}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Pages that need a session to render.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Create | Self::Edit { .. })
    }

    /// Pages that make no sense once logged in.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(AppRoute),
}

pub fn guard(route: &AppRoute, session: Option<&Session>) -> Access {
    if route.is_protected() && session.is_none() {
        tracing::debug!(route = %route, "no session, redirecting to login");
        return Access::Redirect(AppRoute::Login);
    }
    Access::Render
}

/// Sends a logged-in user away from the login and register pages.
pub fn guest_redirect(route: &AppRoute, session: Option<&Session>) -> Option<AppRoute> {
    (route.is_guest_only() && session.is_some()).then_some(AppRoute::Home)
}

/// Route that actually renders when `path` is requested.
pub fn resolve(path: &str, session: Option<&Session>) -> AppRoute {
    let route = AppRoute::parse(path);
    match guard(&route, session) {
        Access::Render => route,
        Access::Redirect(to) => to,
    }
}
