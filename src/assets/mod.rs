//! Asset providers - where base art, overlays and placeholders come from
//!
//! The pipeline only ever asks for an image by key and treats a missing
//! image as a fallback condition. Two providers are included:
//!
//! - [`AssetRegistry`] - images held in memory, registered by key
//! - [`DirectoryAssets`] - `<root>/<key>.png` files on disk

mod directory;
mod registry;

pub use directory::{AssetError, DirectoryAssets};
pub use registry::{AssetRegistry, Registry};

use image::RgbaImage;
use std::sync::Arc;

/// Source of images by resource key.
pub trait ResourceProvider {
    /// Load the image for `key`, or `None` if there is no such asset.
    fn load_image(&self, key: &str) -> Option<RgbaImage>;
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for &T {
    fn load_image(&self, key: &str) -> Option<RgbaImage> {
        (**self).load_image(key)
    }
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Box<T> {
    fn load_image(&self, key: &str) -> Option<RgbaImage> {
        (**self).load_image(key)
    }
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for Arc<T> {
    fn load_image(&self, key: &str) -> Option<RgbaImage> {
        (**self).load_image(key)
    }
}
