//! Display settings for the sprite builder
//!
//! Provides types and parsing for `pokesprite.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, find_config_from, find_xdg_config, load_config, merge_cli_overrides,
    CliOverrides, ConfigError, CONFIG_FILE_NAME,
};
pub use schema::*;
