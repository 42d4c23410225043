//! Composition - layering overlays onto a base sprite

mod blend;
mod layer;

// Re-export public API
pub use layer::{center_preview, layer, layer_faded, layer_matched};
