//! Configuration loading and discovery for `pokesprite.toml`
//!
//! Provides functions to find, load, and merge display settings.

use super::schema::{DisplayConfig, SpriteBackground};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "pokesprite.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pokesprite.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// JSON parsing error
    #[error("Failed to parse JSON config: {0}")]
    ParseJson(#[from] serde_json::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override egg display mode
    pub egg_as_item: Option<bool>,
    /// Override experience bar
    pub experience_percent: Option<bool>,
    /// Override tera color style
    pub tera_style: Option<SpriteBackground>,
    /// Override encounter color style
    pub encounter_style: Option<SpriteBackground>,
}

/// Find pokesprite.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for pokesprite.toml
/// 2. Check XDG_CONFIG_HOME/pokesprite/pokesprite.toml (or ~/.config/pokesprite/pokesprite.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find pokesprite.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("pokesprite").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find pokesprite.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load display settings.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate one. If no config file is found, returns the
/// default settings.
///
/// Files ending in `.json` are read as JSON, anything else as TOML.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("settings/pokesprite.json")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<DisplayConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(DisplayConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<DisplayConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config: DisplayConfig =
        if is_json { serde_json::from_str(&contents)? } else { toml::from_str(&contents)? };

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    log::debug!("loaded display settings from {}", path.display());
    Ok(config)
}

/// Apply CLI overrides on top of loaded settings.
pub fn merge_cli_overrides(config: &mut DisplayConfig, overrides: &CliOverrides) {
    if let Some(egg_as_item) = overrides.egg_as_item {
        config.egg_as_item = egg_as_item;
    }
    if let Some(experience_percent) = overrides.experience_percent {
        config.experience_percent = experience_percent;
    }
    if let Some(style) = overrides.tera_style {
        config.tera.style = style;
    }
    if let Some(style) = overrides.encounter_style {
        config.encounter.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let subdir = temp.path().join("saves").join("box1");
        fs::create_dir_all(&subdir).unwrap();

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_from_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        let mut file = File::create(&config_path).expect("Failed to create config file");
        file.write_all(
            br#"
egg_as_item = false
experience_percent = true

[encounter]
style = "bottom"
stripe_opacity = 95
background_opacity = 63
stripe_thickness = 2
"#,
        )
        .expect("Failed to write config");

        let config = load_config(Some(&config_path)).unwrap();
        assert!(!config.egg_as_item);
        assert!(config.experience_percent);
        assert_eq!(config.encounter.style, SpriteBackground::Bottom);
        assert_eq!(config.encounter.stripe_thickness, 2);
        assert_eq!(config.tera, DisplayConfig::default().tera);
    }

    #[test]
    fn test_load_config_from_json() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("settings.json");
        fs::write(&config_path, r#"{"egg_as_item": false}"#).unwrap();

        let config = load_config(Some(&config_path)).unwrap();
        assert!(!config.egg_as_item);
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_config(Some(&temp.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "egg_as_item = [").unwrap();

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
[tera]
style = "top"
stripe_opacity = 175
background_opacity = 255
stripe_thickness = 0
"#,
        )
        .unwrap();

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("tera.stripe_thickness"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = DisplayConfig::default();
        let overrides = CliOverrides {
            egg_as_item: Some(false),
            tera_style: Some(SpriteBackground::Full),
            ..Default::default()
        };
        merge_cli_overrides(&mut config, &overrides);

        assert!(!config.egg_as_item);
        assert_eq!(config.tera.style, SpriteBackground::Full);
        assert_eq!(config.encounter.style, SpriteBackground::Full);
        assert!(!config.experience_percent);
    }
}
