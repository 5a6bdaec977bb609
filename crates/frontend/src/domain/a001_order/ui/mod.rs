pub mod details;
pub mod line_items;
pub mod list;
