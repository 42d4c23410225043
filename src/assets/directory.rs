//! Asset directory provider.

use glob::glob;
use image::RgbaImage;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::ResourceProvider;

/// Error opening an asset directory or decoding one of its images.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetError {
    /// Root path is missing or not a directory
    #[error("Asset root '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Root path could not be turned into a search pattern
    #[error("Invalid asset search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// No image is indexed under the key
    #[error("No asset named '{0}'")]
    NotFound(String),
    /// Image exists but could not be read or decoded
    #[error("Failed to load asset '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: image::ImageError,
    },
}

/// PNG files under a root directory, keyed by their path relative to the
/// root without the `.png` extension (`b_25.png` is `b_25`,
/// `overlays/rare_icon_alt.png` is `overlays/rare_icon_alt`).
///
/// The directory is indexed once when opened; files added later are not
/// seen until it is reopened.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
    keys: HashSet<String>,
}

impl DirectoryAssets {
    /// Open and index an asset directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, AssetError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(AssetError::NotADirectory(root));
        }

        let pattern = format!("{}/**/*.png", root.display());
        let mut keys = HashSet::new();
        for path in glob(&pattern)?.filter_map(Result::ok) {
            if let Some(key) = key_for(&root, &path) {
                keys.insert(key);
            }
        }

        log::debug!("indexed {} assets under {}", keys.len(), root.display());
        Ok(Self { root, keys })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Indexed keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Load an image, reporting why it could not be loaded.
    pub fn try_load(&self, key: &str) -> Result<RgbaImage, AssetError> {
        if !self.contains(key) {
            return Err(AssetError::NotFound(key.to_string()));
        }
        let path = self.root.join(format!("{}.png", key));
        let image = image::open(&path)
            .map_err(|source| AssetError::Decode { key: key.to_string(), source })?;
        Ok(image.to_rgba8())
    }
}

impl ResourceProvider for DirectoryAssets {
    fn load_image(&self, key: &str) -> Option<RgbaImage> {
        match self.try_load(key) {
            Ok(image) => Some(image),
            Err(AssetError::NotFound(_)) => {
                log::debug!("asset '{}' not found", key);
                None
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

fn key_for(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Vec<&str> =
        relative.components().map(|c| c.as_os_str().to_str()).collect::<Option<_>>()?;
    Some(parts.join("/"))
}
