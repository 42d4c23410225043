//! Flat recolor and grayscale

use image::{Rgba, RgbaImage};

use super::{ALPHA, BPP};

/// Replace the color of every visible pixel, keeping its alpha.
///
/// Produces a flat silhouette of the sprite in `color`.
pub fn recolor_opaque(img: &RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let mut out = img.clone();
    recolor_opaque_in_place(&mut out, color);
    out
}

pub fn recolor_opaque_in_place(data: &mut [u8], color: Rgba<u8>) {
    for px in data.chunks_exact_mut(BPP) {
        if px[ALPHA] == 0 {
            continue;
        }
        px[..ALPHA].copy_from_slice(&color.0[..ALPHA]);
    }
}

/// Convert every visible pixel to gray with luma weights 0.3 red, 0.59 green
/// and 0.11 blue, truncated.
///
/// Pixels that are already gray are left alone so a second pass changes
/// nothing. Running the weights over such a pixel could lower it by one
/// (gray 2 would become 1); that drift is traded for idempotence.
pub fn to_grayscale(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    to_grayscale_in_place(&mut out);
    out
}

pub fn to_grayscale_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(BPP) {
        if px[ALPHA] == 0 || (px[0] == px[1] && px[1] == px[2]) {
            continue;
        }
        let grey = (0.3 * px[0] as f64 + 0.59 * px[1] as f64 + 0.11 * px[2] as f64) as u8;
        px[0] = grey;
        px[1] = grey;
        px[2] = grey;
    }
}
