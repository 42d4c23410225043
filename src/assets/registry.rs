//! In-memory asset registry.

use image::RgbaImage;
use std::collections::HashMap;

use super::ResourceProvider;

/// Common trait for registries that store named items.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use pokesprite::assets::{AssetRegistry, Registry};
///
/// let mut registry = AssetRegistry::new();
/// registry.register("b_1", RgbaImage::new(68, 56));
///
/// assert!(registry.contains("b_1"));
/// assert_eq!(registry.len(), 1);
/// ```
pub trait Registry<V> {
    /// Check if an item with the given name exists in the registry.
    fn contains(&self, name: &str) -> bool;

    /// Get an item by name.
    ///
    /// Returns `None` if no item with the given name exists.
    fn get(&self, name: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all items from the registry.
    fn clear(&mut self);

    /// Get an iterator over all names in the registry.
    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_>;
}

/// Images registered under resource keys.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    images: HashMap<String, RgbaImage>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self { images: HashMap::new() }
    }

    /// Register an image, replacing any previous image with the same key.
    pub fn register(&mut self, key: impl Into<String>, image: RgbaImage) {
        self.images.insert(key.into(), image);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, key: impl Into<String>, image: RgbaImage) -> Self {
        self.register(key, image);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<RgbaImage> {
        self.images.remove(key)
    }
}

impl Registry<RgbaImage> for AssetRegistry {
    fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&RgbaImage> {
        self.images.get(name)
    }

    fn len(&self) -> usize {
        self.images.len()
    }

    fn clear(&mut self) {
        self.images.clear();
    }

    fn names(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        Box::new(self.images.keys())
    }
}

impl ResourceProvider for AssetRegistry {
    fn load_image(&self, key: &str) -> Option<RgbaImage> {
        self.images.get(key).cloned()
    }
}
