pub mod pagination;
pub mod serde_utils;
pub mod sorting;
pub mod table;
