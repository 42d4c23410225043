//! Opacity adjustments

use image::RgbaImage;

use super::{ALPHA, BPP};

/// Scale every pixel's alpha by `factor`.
///
/// The product is truncated toward zero, so `factor = 1.0` is the identity
/// and `factor = 0.0` clears alpha while keeping the color bytes.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pokesprite::effects::scale_opacity;
///
/// let img = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
/// let faded = scale_opacity(&img, 0.5);
/// assert_eq!(*faded.get_pixel(0, 0), Rgba([10, 20, 30, 127]));
/// ```
pub fn scale_opacity(img: &RgbaImage, factor: f64) -> RgbaImage {
    let mut out = img.clone();
    scale_opacity_in_place(&mut out, factor);
    out
}

pub fn scale_opacity_in_place(data: &mut [u8], factor: f64) {
    for px in data.chunks_exact_mut(BPP) {
        px[ALPHA] = (px[ALPHA] as f64 * factor) as u8;
    }
}

/// Force every pixel that has any alpha to be fully opaque.
pub fn set_used_pixels_opaque(data: &mut [u8]) {
    for px in data.chunks_exact_mut(BPP) {
        if px[ALPHA] != 0 {
            px[ALPHA] = 0xFF;
        }
    }
}
