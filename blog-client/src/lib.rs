//! Platform-neutral core of the Inkwell blog client.
//!
//! Holds everything a front-end needs besides rendering: the wire model, the
//! [`BlogApi`] boundary, the session store, the route table with its guard and
//! the per-page state machines. The web and terminal front-ends are thin
//! shells around these types.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod routes;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
mod http_client;

#[cfg(test)]
pub(crate) mod mock;

pub use api::BlogApi;
pub use config::ClientConfig;
pub use error::BlogClientError;
#[cfg(not(target_arch = "wasm32"))]
pub use http_client::BlogClientHttp;
pub use model::{Author, Cover, CoverFile, NewPost, Notice, NoticeKind, Post, PostDraft, PostUpdate, Session};
pub use routes::{Access, AppRoute};
pub use session::{MemoryStorage, SessionStorage, SessionStore};
