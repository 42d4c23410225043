//! Pixel buffer operations behind the sprite effects
//!
//! Every public function copies its input and returns a new buffer of the
//! same dimensions; the `*_in_place` variants work on a raw RGBA byte slice
//! (`width * height * 4` bytes, alpha last) and are what the copies run.
//!
//! Pixels with alpha 0 are fully transparent and their color bytes carry no
//! meaning. The glow effect relies on this by storing its intensity in the
//! blue byte of transparent pixels.
//!
//! # Module Structure
//!
//! - [`opacity`] - Alpha scaling and forcing used pixels opaque
//! - [`fill`] - Transparent fill, blend toward a color, raw range fill
//! - [`tone`] - Flat recolor and grayscale
//! - [`glow`] - Two-pass edge glow and hollow glow layers

pub mod fill;
pub mod glow;
pub mod opacity;
pub mod tone;

pub use fill::{
    blend_transparent, blend_transparent_span, fill_range, fill_transparent,
    fill_transparent_span, full_span,
};
pub use glow::{glow_edges, remove_pixels, sprite_glow, GLOW_AMOUNT, GLOW_REACH};
pub use opacity::{scale_opacity, set_used_pixels_opaque};
pub use tone::{recolor_opaque, to_grayscale};

/// Bytes per RGBA pixel.
pub const BPP: usize = 4;

/// Index of the alpha byte within a pixel.
pub(crate) const ALPHA: usize = 3;
