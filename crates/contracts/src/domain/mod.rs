pub mod a001_order;
pub mod a002_product;
pub mod common;
