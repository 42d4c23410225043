//! Edge glow
//!
//! The glow is computed in two passes over the buffer:
//!
//! 1. **Pollute**: every visible pixel bumps the blue byte of each
//!    pixel within `reach` (Chebyshev distance, clamped to the buffer) by
//!    `amount * (255 - byte)`. Pixels near several visible pixels are bumped
//!    several times, so intensity falls off with distance from the sprite.
//! 2. **Clean**: every transparent pixel whose blue byte was bumped becomes
//!    the glow color, using that byte as its alpha.
//!
//! Transparent pixels are expected to start with a zero blue byte.

use image::{Rgba, RgbaImage};

use super::opacity::set_used_pixels_opaque;
use super::{ALPHA, BPP};

/// Default glow reach, in pixels.
pub const GLOW_REACH: usize = 3;

/// Default fraction of the remaining headroom added per pollution step.
pub const GLOW_AMOUNT: f64 = 0.0777;

/// Color byte that accumulates pollution (blue).
const POLLUTE_INDEX: usize = 2;

/// Apply an edge glow to a copy of `img`.
///
/// Visible pixels have their blue byte brightened by the pollution
/// pass as well; use [`sprite_glow`] with `hollow` to get only the halo.
pub fn glow_edges(img: &RgbaImage, color: Rgba<u8>, reach: usize, amount: f64) -> RgbaImage {
    let mut out = img.clone();
    let width = out.width() as usize;
    glow_edges_in_place(&mut out, width, color, reach, amount);
    out
}

pub fn glow_edges_in_place(data: &mut [u8], width: usize, color: Rgba<u8>, reach: usize, amount: f64) {
    pollute_pixels(data, width, reach, amount);
    clean_polluted_pixels(data, color);
}

// Pixels are mutated while the scan is still reading; later donors see the
// pollution earlier ones left behind. The row-major order is part of the output.
fn pollute_pixels(data: &mut [u8], width: usize, reach: usize, amount: f64) {
    let stride = width * BPP;
    let height = data.len() / stride;

    for i in (0..data.len()).step_by(BPP) {
        // only visible pixels pollute outwards
        if data[i + ALPHA] == 0 {
            continue;
        }

        let x = (i % stride) / BPP;
        let y = i / stride;
        let left = x.saturating_sub(reach);
        let right = (x + reach).min(width - 1);
        let top = y.saturating_sub(reach);
        let bottom = (y + reach).min(height - 1);

        for ix in left..=right {
            for iy in top..=bottom {
                let b = &mut data[BPP * (ix + iy * width) + POLLUTE_INDEX];
                *b = b.wrapping_add((amount * (0xFF - *b) as f64) as u8);
            }
        }
    }
}

fn clean_polluted_pixels(data: &mut [u8], color: Rgba<u8>) {
    for px in data.chunks_exact_mut(BPP) {
        if px[ALPHA] != 0 {
            continue;
        }

        // the polluted byte becomes the glow's alpha
        let intensity = px[POLLUTE_INDEX];
        if intensity == 0 {
            continue;
        }

        px.copy_from_slice(&[color[0], color[1], color[2], intensity]);
    }
}

/// Clear every pixel that is visible in `original`.
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn remove_pixels(pixels: &mut [u8], original: &[u8]) {
    assert_eq!(pixels.len(), original.len(), "pixel buffers differ in size");
    for (px, orig) in pixels.chunks_exact_mut(BPP).zip(original.chunks_exact(BPP)) {
        if orig[ALPHA] != 0 {
            px.fill(0);
        }
    }
}

/// Build a glow layer for a sprite with the default reach and amount.
///
/// With `hollow`, translucent pixels are treated as fully opaque while
/// glowing and every pixel the sprite covers is cleared afterwards, leaving a
/// halo that can be layered under or over the sprite without tinting it.
pub fn sprite_glow(img: &RgbaImage, color: Rgba<u8>, hollow: bool) -> RgbaImage {
    let mut pixels = img.clone();
    let width = pixels.width() as usize;

    if !hollow {
        glow_edges_in_place(&mut pixels, width, color, GLOW_REACH, GLOW_AMOUNT);
        return pixels;
    }

    set_used_pixels_opaque(&mut pixels);
    glow_edges_in_place(&mut pixels, width, color, GLOW_REACH, GLOW_AMOUNT);
    remove_pixels(&mut pixels, img.as_raw());
    pixels
}
