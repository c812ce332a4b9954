mod editor;
mod layout;
mod modal;
mod post_card;
mod protected;

pub use editor::Editor;
pub use layout::MainLayout;
pub use modal::{ConfirmModal, NoticeModal};
pub use post_card::PostCard;
pub use protected::Protected;
