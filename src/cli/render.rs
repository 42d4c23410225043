//! Render and batch command implementations

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use image::RgbaImage;

use crate::art::{ArtKind, ArtSet, BoxArt, CompactArt};
use crate::assets::DirectoryAssets;
use crate::builder::SpriteBuilder;
use crate::color::{parse_hex_color, ElementType};
use crate::config::{load_config, merge_cli_overrides, DisplayConfig};
use crate::decorate::{apply_encounter_color, apply_experience, apply_tera_color};
use crate::entity::SpriteRequest;
use crate::output::{batch_output_path, save_png, scale_image};

use super::{DisplayArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Hints painted after the sprite is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decorations<'a> {
    pub tera: Option<ElementType>,
    pub encounter_color: Option<&'a str>,
    /// Progress fraction and level
    pub experience: Option<(f64, u8)>,
    pub entity_view: bool,
}

/// Execute the render command
pub fn run_render(
    request: &SpriteRequest,
    display: &DisplayArgs,
    decorations: &Decorations<'_>,
    output: &Path,
) -> ExitCode {
    let encounter_color = match decorations.encounter_color.map(parse_hex_color).transpose() {
        Ok(color) => color,
        Err(e) => {
            eprintln!("Error: Invalid encounter color: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (assets, mut config) = match open(display) {
        Ok(opened) => opened,
        Err(code) => return code,
    };
    if decorations.experience.is_some() {
        config.experience_percent = true;
    }
    if decorations.entity_view {
        config = config.for_entity_view();
    }

    let mut sprite = match display.art {
        ArtKind::Box => build_one(BoxArt, assets, config, display, request),
        ArtKind::Compact => build_one(CompactArt, assets, config, display, request),
    };
    if let Some(element) = decorations.tera {
        sprite = apply_tera_color(&sprite, element, &config);
    }
    if let Some(color) = encounter_color {
        sprite = apply_encounter_color(&sprite, color, &config);
    }
    if let (true, Some((fraction, level))) = (config.experience_percent, decorations.experience) {
        sprite = apply_experience(&sprite, fraction, level);
    }

    let sprite = scale_image(sprite, display.scale);
    if let Err(e) = save_png(&sprite, output) {
        eprintln!("Error: Failed to save '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the batch command
pub fn run_batch(requests_path: &Path, display: &DisplayArgs, output: &Path) -> ExitCode {
    let requests: Vec<SpriteRequest> = match fs::read_to_string(requests_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("Error: Cannot read requests from '{}': {}", requests_path.display(), e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let (assets, config) = match open(display) {
        Ok(opened) => opened,
        Err(code) => return code,
    };

    let sprites = match display.art {
        ArtKind::Box => build_many(BoxArt, assets, config, display, &requests),
        ArtKind::Compact => build_many(CompactArt, assets, config, display, &requests),
    };

    for (index, (request, sprite)) in requests.iter().zip(sprites).enumerate() {
        let path = batch_output_path(output, index, request);
        if let Err(e) = save_png(&scale_image(sprite, display.scale), &path) {
            eprintln!("Error: Failed to save '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    }
    println!("Saved {} sprites to {}", requests.len(), output.display());
    ExitCode::from(EXIT_SUCCESS)
}

fn open(display: &DisplayArgs) -> Result<(DirectoryAssets, DisplayConfig), ExitCode> {
    let assets = DirectoryAssets::open(&display.assets).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })?;
    if assets.is_empty() {
        eprintln!("Warning: No images found under '{}'", display.assets.display());
    }

    let mut config = load_config(display.config.as_deref()).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_ERROR)
    })?;
    merge_cli_overrides(&mut config, &display.overrides());
    Ok((assets, config))
}

fn builder<A: ArtSet>(
    art: A,
    assets: DirectoryAssets,
    config: DisplayConfig,
    display: &DisplayArgs,
) -> SpriteBuilder<A, DirectoryAssets> {
    SpriteBuilder::new(art, assets).with_config(config).with_game(display.game)
}

fn build_one<A: ArtSet>(
    art: A,
    assets: DirectoryAssets,
    config: DisplayConfig,
    display: &DisplayArgs,
    request: &SpriteRequest,
) -> RgbaImage {
    builder(art, assets, config, display).build(request)
}

fn build_many<A: ArtSet>(
    art: A,
    assets: DirectoryAssets,
    config: DisplayConfig,
    display: &DisplayArgs,
    requests: &[SpriteRequest],
) -> Vec<RgbaImage> {
    builder(art, assets, config, display).build_all(requests)
}
