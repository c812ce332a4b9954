mod author;
mod create;
mod edit;
mod home;
mod login;
mod not_found;
mod post_detail;
mod register;

pub use author::AuthorPosts;
pub use create::Create;
pub use edit::Edit;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use post_detail::PostDetail;
pub use register::Register;
