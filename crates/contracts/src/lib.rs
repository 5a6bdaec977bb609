//! Shared contracts between the dashboard frontend and the storefront API.
//!
//! - [`domain`] - wire DTOs for orders and products
//! - [`shared`] - UI-agnostic helpers (table metadata, sorting, pagination)

pub mod domain;
pub mod shared;
