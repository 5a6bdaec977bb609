pub mod aggregate;

pub use aggregate::{FoodOrigin, Order, OrderListResponse, ProductOrder, TrackingState};
