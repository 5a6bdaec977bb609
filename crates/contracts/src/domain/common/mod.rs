//! Common types shared by all storefront DTOs

pub mod image_asset;

// Re-exports
pub use image_asset::ImageAsset;
