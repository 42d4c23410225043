//! Assets command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::assets::DirectoryAssets;

use super::{EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the assets command
pub fn run_assets(dir: &Path, prefix: Option<&str>) -> ExitCode {
    let assets = match DirectoryAssets::open(dir) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let keys: Vec<&str> =
        assets.keys().into_iter().filter(|key| prefix.map_or(true, |p| key.starts_with(p))).collect();
    for key in &keys {
        println!("{}", key);
    }
    eprintln!("{} of {} assets", keys.len(), assets.len());
    ExitCode::from(EXIT_SUCCESS)
}
