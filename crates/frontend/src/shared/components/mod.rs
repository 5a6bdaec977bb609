pub mod card_animated;
pub mod confirm_dialog;
pub mod page_header;
pub mod table;
pub mod ui;

pub use card_animated::CardAnimated;
pub use confirm_dialog::ConfirmDialog;
pub use page_header::PageHeader;
