//! Background hints and the experience bar
//!
//! Hints are painted under a sprite: only transparent and translucent pixels
//! change, so the entity itself stays on top.

use image::{Rgba, RgbaImage};

use crate::color::ElementType;
use crate::config::{BackgroundConfig, DisplayConfig, SpriteBackground};
use crate::effects::{blend_transparent, blend_transparent_span, fill_range, BPP};

/// Experience bar color one level before the cap.
pub const EXPERIENCE_NEAR_CAP: Rgba<u8> = Rgba([0, 255, 0, 255]);

/// Experience bar color below that.
pub const EXPERIENCE_DEFAULT: Rgba<u8> = Rgba([30, 144, 255, 255]);

/// Highest level; nothing is left to gain.
pub const MAX_LEVEL: u8 = 100;

/// Paint `color` behind a sprite in the given style.
pub fn apply_color(
    img: &RgbaImage,
    style: SpriteBackground,
    color: Rgba<u8>,
    settings: &BackgroundConfig,
) -> RgbaImage {
    let row_bytes = img.width() as usize * BPP;
    let height = img.height();
    let thickness = settings.stripe_thickness.min(height) as usize;
    let alpha = settings.stripe_opacity;

    match style {
        SpriteBackground::None => img.clone(),
        SpriteBackground::Full => blend_transparent(img, color, settings.background_opacity),
        SpriteBackground::Bottom => {
            let start = row_bytes * (height as usize - thickness);
            match img.len().checked_sub(BPP) {
                Some(end) if thickness > 0 => blend_transparent_span(img, color, alpha, start..=end),
                _ => img.clone(),
            }
        }
        SpriteBackground::Top => match (row_bytes * thickness).checked_sub(BPP) {
            Some(end) => blend_transparent_span(img, color, alpha, 0..=end),
            None => img.clone(),
        },
    }
}

/// Paint the tera type color using the `tera` settings.
pub fn apply_tera_color(img: &RgbaImage, element: ElementType, config: &DisplayConfig) -> RgbaImage {
    apply_color(img, config.tera.style, element.sprite_color(), &config.tera)
}

/// Paint an encounter color using the `encounter` settings.
pub fn apply_encounter_color(img: &RgbaImage, color: Rgba<u8>, config: &DisplayConfig) -> RgbaImage {
    apply_color(img, config.encounter.style, color, &config.encounter)
}

/// Draw the experience bar along the bottom row.
///
/// `fraction` is the progress toward the next level and is clamped to
/// `0.0..=1.0`. Nothing is drawn at [`MAX_LEVEL`] or with no progress.
pub fn apply_experience(img: &RgbaImage, fraction: f64, level: u8) -> RgbaImage {
    let fraction = fraction.clamp(0.0, 1.0);
    if level >= MAX_LEVEL || fraction <= 0.0 || img.is_empty() {
        return img.clone();
    }

    let width = img.width() as usize;
    let start = width * BPP * (img.height() as usize - 1);
    let filled = (width as f64 * fraction) as usize;
    let color = if level == MAX_LEVEL - 1 { EXPERIENCE_NEAR_CAP } else { EXPERIENCE_DEFAULT };

    log::trace!("experience bar {}/{} px", filled, width);
    fill_range(img, color, start, start + filled * BPP)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn settings(thickness: u32) -> BackgroundConfig {
        BackgroundConfig {
            style: SpriteBackground::None,
            entity_style: SpriteBackground::None,
            stripe_opacity: 0x5F,
            background_opacity: 0x3F,
            stripe_thickness: thickness,
        }
    }

    fn rows_with_alpha(img: &RgbaImage, alpha: u8) -> Vec<u32> {
        (0..img.height())
            .filter(|&y| (0..img.width()).all(|x| img.get_pixel(x, y)[3] == alpha))
            .collect()
    }

    #[test]
    fn test_bottom_stripe() {
        let img = RgbaImage::new(2, 3);
        let out = apply_color(&img, SpriteBackground::Bottom, RED, &settings(1));
        assert_eq!(rows_with_alpha(&out, 0x5F), vec![2]);
        assert_eq!(*out.get_pixel(1, 2), Rgba([255, 0, 0, 0x5F]));
        assert_eq!(rows_with_alpha(&out, 0), vec![0, 1]);
    }

    #[test]
    fn test_top_stripe() {
        let img = RgbaImage::new(2, 3);
        let out = apply_color(&img, SpriteBackground::Top, RED, &settings(2));
        assert_eq!(rows_with_alpha(&out, 0x5F), vec![0, 1]);
        assert_eq!(rows_with_alpha(&out, 0), vec![2]);
    }

    #[test]
    fn test_stripe_thickness_clamped_to_height() {
        let img = RgbaImage::new(2, 3);
        let bottom = apply_color(&img, SpriteBackground::Bottom, RED, &settings(10));
        let top = apply_color(&img, SpriteBackground::Top, RED, &settings(10));
        assert_eq!(rows_with_alpha(&bottom, 0x5F), vec![0, 1, 2]);
        assert_eq!(bottom, top);
    }

    #[test]
    fn test_zero_thickness_is_noop() {
        let img = RgbaImage::new(2, 3);
        assert_eq!(apply_color(&img, SpriteBackground::Bottom, RED, &settings(0)), img);
        assert_eq!(apply_color(&img, SpriteBackground::Top, RED, &settings(0)), img);
    }

    #[test]
    fn test_full_background_keeps_opaque_pixels() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
        let out = apply_color(&img, SpriteBackground::Full, RED, &settings(0));
        assert_eq!(*out.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*out.get_pixel(1, 1), Rgba([255, 0, 0, 0x3F]));
    }

    #[test]
    fn test_tera_color_uses_tera_settings() {
        let config = DisplayConfig::default();
        let img = RgbaImage::new(3, 6);
        let out = apply_tera_color(&img, ElementType::Water, &config);
        // Default is a 4 row top stripe at 0xAF
        assert_eq!(rows_with_alpha(&out, 0xAF), vec![0, 1, 2, 3]);
        assert_eq!(*out.get_pixel(0, 0), Rgba([41, 128, 239, 0xAF]));
    }

    #[test]
    fn test_encounter_color_uses_encounter_settings() {
        let config = DisplayConfig::default();
        let img = RgbaImage::new(2, 2);
        let out = apply_encounter_color(&img, RED, &config);
        assert_eq!(rows_with_alpha(&out, 0x3F), vec![0, 1]);
    }

    #[test]
    fn test_experience_bar() {
        let img = RgbaImage::new(4, 2);
        let out = apply_experience(&img, 0.5, 50);
        assert_eq!(*out.get_pixel(0, 1), EXPERIENCE_DEFAULT);
        assert_eq!(*out.get_pixel(1, 1), EXPERIENCE_DEFAULT);
        assert_eq!(*out.get_pixel(2, 1), Rgba([0, 0, 0, 0]));
        assert_eq!(rows_with_alpha(&out, 0), vec![0]);
    }

    #[test]
    fn test_experience_bar_near_cap_and_clamped() {
        let img = RgbaImage::new(4, 2);
        let out = apply_experience(&img, 3.0, 99);
        for x in 0..4 {
            assert_eq!(*out.get_pixel(x, 1), EXPERIENCE_NEAR_CAP);
        }
    }

    #[test]
    fn test_experience_bar_skipped() {
        let img = RgbaImage::new(4, 2);
        assert_eq!(apply_experience(&img, 0.5, MAX_LEVEL), img);
        assert_eq!(apply_experience(&img, 0.0, 10), img);
        assert_eq!(apply_experience(&img, 0.2, 10), img);
    }
}
