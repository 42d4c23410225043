//! Layering one image over another

use image::{Rgba, RgbaImage};

use crate::effects::scale_opacity;

use super::blend::blit;

/// Border around a preview card, in pixels on each side.
const PREVIEW_BORDER: u32 = 2;

/// Draw `overlay` over a copy of `base` at `(x, y)`.
///
/// The result always has the dimensions of `base`. Overlay pixels outside it
/// are clipped and negative offsets clip off the top/left edge.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use pokesprite::composition::layer;
///
/// let base = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
/// let dot = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
///
/// let out = layer(&base, &dot, 3, 3);
/// assert_eq!(*out.get_pixel(3, 3), Rgba([255, 0, 0, 255]));
/// assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
/// ```
pub fn layer(base: &RgbaImage, overlay: &RgbaImage, x: i32, y: i32) -> RgbaImage {
    // base drawn at the origin of a same-sized canvas is the base itself
    let mut canvas = base.clone();
    blit(&mut canvas, overlay, x, y);
    log::trace!(
        "layered {}x{} over {}x{} at ({}, {})",
        overlay.width(),
        overlay.height(),
        base.width(),
        base.height(),
        x,
        y
    );
    canvas
}

/// [`layer`] with the overlay's alpha first scaled by `opacity`.
pub fn layer_faded(base: &RgbaImage, overlay: &RgbaImage, x: i32, y: i32, opacity: f64) -> RgbaImage {
    if opacity >= 1.0 {
        return layer(base, overlay, x, y);
    }
    layer(base, &scale_opacity(overlay, opacity), x, y)
}

/// Layer an image of identical size over `base` at the origin.
///
/// # Panics
///
/// Panics if the dimensions differ; a mismatch here means the overlay was
/// derived from the wrong buffer and the output would be silently wrong.
pub fn layer_matched(base: &RgbaImage, overlay: &RgbaImage) -> RgbaImage {
    assert_eq!(
        base.dimensions(),
        overlay.dimensions(),
        "overlay must match base dimensions"
    );
    layer(base, overlay, 0, 0)
}

/// Center a preview on a white card and the card on top of `code`.
///
/// The card is the preview plus a small white border so the preview stays
/// readable over a busy code pattern.
pub fn center_preview(code: &RgbaImage, preview: &RgbaImage) -> RgbaImage {
    let card_width = preview.width() + PREVIEW_BORDER * 2;
    let card_height = preview.height() + PREVIEW_BORDER * 2;
    let card = RgbaImage::from_pixel(card_width, card_height, Rgba([255, 255, 255, 255]));

    let px = centered(card_width, preview.width());
    let py = centered(card_height, preview.height());
    let card = layer(&card, preview, px, py);

    let cx = centered(code.width(), card_width);
    let cy = centered(code.height(), card_height);
    layer(code, &card, cx, cy)
}

fn centered(outer: u32, inner: u32) -> i32 {
    (outer / 2) as i32 - (inner / 2) as i32
}
