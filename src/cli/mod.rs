//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod assets;
mod render;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::art::ArtKind;
use crate::color::ElementType;
use crate::config::{CliOverrides, SpriteBackground};
use crate::entity::{EntityContext, GameVersion, Shiny, SpriteRequest};

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pokesprite - compose entity sprites from pre-rendered art
#[derive(Parser)]
#[command(name = "pokesprite")]
#[command(about = "Pokesprite - compose entity sprites from pre-rendered box art")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build one sprite and write it as PNG
    Render {
        #[command(flatten)]
        request: RequestArgs,

        #[command(flatten)]
        display: DisplayArgs,

        /// Tera type hint painted behind the sprite
        #[arg(long, value_enum)]
        tera: Option<ElementType>,

        /// Encounter color hint painted behind the sprite (#RRGGBB)
        #[arg(long, value_name = "HEX")]
        encounter_color: Option<String>,

        /// Experience progress toward the next level (0.0-1.0); draws the bar
        #[arg(long, value_name = "FRACTION")]
        exp: Option<f64>,

        /// Current level, used to color the experience bar
        #[arg(long, default_value = "1")]
        level: u8,

        /// Use the single-entity view styles for color hints
        #[arg(long)]
        entity_view: bool,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Build every request in a JSON array and write them into a directory
    Batch {
        /// JSON file holding an array of sprite requests
        requests: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the resource keys found in an asset directory
    Assets {
        /// Asset directory
        dir: PathBuf,

        /// Only list keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
}

/// Fields of a single sprite request.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Species id (0 for an empty slot)
    #[arg(long)]
    pub species: u16,

    #[arg(long, default_value = "0")]
    pub form: u8,

    /// Gender (0 male, 1 female, 2 genderless)
    #[arg(long, default_value = "0")]
    pub gender: u8,

    /// Form argument (e.g. Alcremie topping)
    #[arg(long = "form-arg", default_value = "0")]
    pub form_argument: u32,

    /// Held item id
    #[arg(long, default_value = "0")]
    pub item: u16,

    #[arg(long)]
    pub egg: bool,

    #[arg(long, value_enum, default_value = "never")]
    pub shiny: Shiny,

    #[arg(long, value_enum, default_value = "none")]
    pub context: EntityContext,
}

impl RequestArgs {
    pub fn to_request(&self) -> SpriteRequest {
        SpriteRequest::new(self.species)
            .with_form(self.form)
            .with_gender(self.gender)
            .with_form_argument(self.form_argument)
            .with_item(self.item)
            .with_egg(self.egg)
            .with_shiny(self.shiny)
            .with_context(self.context)
    }
}

/// Art, assets and display settings shared by rendering commands.
#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Asset directory holding the art as `<key>.png`
    #[arg(long)]
    pub assets: PathBuf,

    #[arg(long, value_enum, default_value = "box")]
    pub art: ArtKind,

    /// Game version of the save, for cartridge-dependent forms
    #[arg(long, value_enum, default_value = "unknown")]
    pub game: GameVersion,

    /// Settings file (default: pokesprite.toml found from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Scale output by integer factor (1-16, default: 1)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub scale: u8,

    /// Show an egg over a faded species even without a held item
    #[arg(long)]
    pub egg_over_species: bool,

    #[arg(long, value_enum)]
    pub tera_style: Option<SpriteBackground>,

    #[arg(long, value_enum)]
    pub encounter_style: Option<SpriteBackground>,
}

impl DisplayArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            egg_as_item: self.egg_over_species.then_some(false),
            experience_percent: None,
            tera_style: self.tera_style,
            encounter_style: self.encounter_style,
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            request,
            display,
            tera,
            encounter_color,
            exp,
            level,
            entity_view,
            output,
        } => render::run_render(
            &request.to_request(),
            &display,
            &render::Decorations {
                tera,
                encounter_color: encounter_color.as_deref(),
                experience: exp.map(|fraction| (fraction, level)),
                entity_view,
            },
            &output,
        ),
        Commands::Batch { requests, display, output } => {
            render::run_batch(&requests, &display, &output)
        }
        Commands::Assets { dir, prefix } => assets::run_assets(&dir, prefix.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args_parse() {
        let cli = Cli::try_parse_from([
            "pokesprite",
            "render",
            "--assets",
            "art",
            "--species",
            "25",
            "--form",
            "3",
            "--shiny",
            "square",
            "--context",
            "gen8",
            "--art",
            "compact",
            "--tera",
            "fire",
            "-o",
            "out.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Render { request, display, tera, output, .. } => {
                let req = request.to_request();
                assert_eq!(req.species, 25);
                assert_eq!(req.form, 3);
                assert_eq!(req.shiny, Shiny::AlwaysSquare);
                assert_eq!(req.context, EntityContext::Gen8);
                assert_eq!(display.art, ArtKind::Compact);
                assert_eq!(display.scale, 1);
                assert_eq!(tera, Some(ElementType::Fire));
                assert_eq!(output, PathBuf::from("out.png"));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let result = Cli::try_parse_from([
            "pokesprite", "render", "--assets", "art", "--species", "1", "--scale", "0", "-o", "x.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_overrides() {
        let cli = Cli::try_parse_from([
            "pokesprite",
            "batch",
            "requests.json",
            "--assets",
            "art",
            "--egg-over-species",
            "--tera-style",
            "bottom",
            "-o",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Batch { display, .. } => {
                let overrides = display.overrides();
                assert_eq!(overrides.egg_as_item, Some(false));
                assert_eq!(overrides.tera_style, Some(SpriteBackground::Bottom));
                assert_eq!(overrides.encounter_style, None);
            }
            _ => panic!("expected batch command"),
        }
    }
}
