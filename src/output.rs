//! PNG output and file path generation

use image::imageops::FilterType;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entity::SpriteRequest;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    log::debug!("wrote {}x{} sprite to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges. A factor of 0 or 1 returns the image
/// unchanged.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    let new_w = w * factor as u32;
    let new_h = h * factor as u32;
    image::imageops::resize(&image, new_w, new_h, FilterType::Nearest)
}

/// Path for one sprite of a batch written into `dir`.
///
/// | Request | File |
/// |---------|------|
/// | #0, species 25 | `000_25.png` |
/// | #3, species 6 form 2 | `003_6-2.png` |
/// | #4, species 6 shiny | `004_6s.png` |
pub fn batch_output_path(dir: &Path, index: usize, request: &SpriteRequest) -> PathBuf {
    let mut name = format!("{:03}_{}", index, request.species);
    if request.form != 0 {
        name.push_str(&format!("-{}", request.form));
    }
    if request.shiny.is_shiny() {
        name.push('s');
    }
    dir.join(format!("{}.png", name))
}
