//! Order details page
//!
//! - model.rs: API functions
//! - page.rs: Leptos component

mod model;
mod page;

pub use page::OrderDetails;
