pub mod header;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod page;
pub mod save_bar;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use modal::ConfirmationModal;
pub use page::{ErrorPage, LoadingPage, Page};
pub use save_bar::SaveBar;
