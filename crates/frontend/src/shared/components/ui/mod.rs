pub mod avatar;
pub mod icon_button;
pub mod severity_pill;
pub mod skeleton;

pub use avatar::Avatar;
pub use icon_button::IconButton;
pub use severity_pill::{SeverityColor, SeverityPill};
pub use skeleton::{SkeletonBlock, SkeletonText};
