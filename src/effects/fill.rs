//! Fills over transparent pixels and raw byte ranges
//!
//! Spans are inclusive byte offsets of the first byte of a pixel, walked from
//! the end toward the start in steps of [`BPP`]. [`full_span`] covers a whole
//! buffer.

use image::{Rgba, RgbaImage};
use std::ops::RangeInclusive;

use super::{ALPHA, BPP};

/// Weight kept from the existing pixel when blending toward a new color.
const BLEND_AMOUNT: f64 = 0.2;

/// Inclusive span covering every pixel of a buffer with `len` bytes.
pub fn full_span(len: usize) -> RangeInclusive<usize> {
    // An empty buffer yields an empty span
    match len.checked_sub(BPP) {
        Some(end) => 0..=end,
        None => 1..=0,
    }
}

fn span_offsets(span: RangeInclusive<usize>) -> impl Iterator<Item = usize> {
    span.rev().step_by(BPP)
}

fn with_alpha(color: Rgba<u8>, alpha: u8) -> [u8; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Paint every fully transparent pixel with `color` at `alpha`.
///
/// Used to seed a silhouette or a solid background behind a sprite.
pub fn fill_transparent(img: &RgbaImage, color: Rgba<u8>, alpha: u8) -> RgbaImage {
    let span = full_span(img.len());
    fill_transparent_span(img, color, alpha, span)
}

/// [`fill_transparent`] restricted to a byte span.
pub fn fill_transparent_span(
    img: &RgbaImage,
    color: Rgba<u8>,
    alpha: u8,
    span: RangeInclusive<usize>,
) -> RgbaImage {
    let mut out = img.clone();
    fill_transparent_in_place(&mut out, color, alpha, span);
    out
}

pub fn fill_transparent_in_place(
    data: &mut [u8],
    color: Rgba<u8>,
    alpha: u8,
    span: RangeInclusive<usize>,
) {
    let value = with_alpha(color, alpha);
    for i in span_offsets(span) {
        let px = &mut data[i..i + BPP];
        if px[ALPHA] == 0 {
            px.copy_from_slice(&value);
        }
    }
}

/// Push transparent and translucent pixels toward `color` at `alpha`.
///
/// - alpha 0: replaced outright, as in [`fill_transparent`]
/// - alpha 255: untouched
/// - anything else: each of the four bytes becomes 20% old, 80% new
pub fn blend_transparent(img: &RgbaImage, color: Rgba<u8>, alpha: u8) -> RgbaImage {
    let span = full_span(img.len());
    blend_transparent_span(img, color, alpha, span)
}

/// [`blend_transparent`] restricted to a byte span.
pub fn blend_transparent_span(
    img: &RgbaImage,
    color: Rgba<u8>,
    alpha: u8,
    span: RangeInclusive<usize>,
) -> RgbaImage {
    let mut out = img.clone();
    blend_transparent_in_place(&mut out, color, alpha, span);
    out
}

pub fn blend_transparent_in_place(
    data: &mut [u8],
    color: Rgba<u8>,
    alpha: u8,
    span: RangeInclusive<usize>,
) {
    let value = with_alpha(color, alpha);
    for i in span_offsets(span) {
        let px = &mut data[i..i + BPP];
        match px[ALPHA] {
            0 => px.copy_from_slice(&value),
            0xFF => {}
            _ => {
                for (old, new) in px.iter_mut().zip(value) {
                    *old = blend_byte(*old, new);
                }
            }
        }
    }
}

// heavily favor the new color
fn blend_byte(old: u8, new: u8) -> u8 {
    (old as f64 * BLEND_AMOUNT + new as f64 * (1.0 - BLEND_AMOUNT)) as u8
}

/// Overwrite every pixel in the half-open byte range `start..end` with
/// `color`, regardless of what was there.
pub fn fill_range(img: &RgbaImage, color: Rgba<u8>, start: usize, end: usize) -> RgbaImage {
    let mut out = img.clone();
    fill_range_in_place(&mut out, color, start, end);
    out
}

pub fn fill_range_in_place(data: &mut [u8], color: Rgba<u8>, start: usize, end: usize) {
    for px in data[start..end].chunks_exact_mut(BPP) {
        px.copy_from_slice(&color.0);
    }
}
