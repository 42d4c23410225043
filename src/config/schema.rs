//! Display settings schema for `pokesprite.toml`
//!
//! ```toml
//! egg_as_item = true
//! experience_percent = false
//!
//! [encounter]
//! style = "full"
//! entity_style = "none"
//! stripe_opacity = 95
//! background_opacity = 63
//! stripe_thickness = 4
//!
//! [tera]
//! style = "top"
//! stripe_opacity = 175
//! background_opacity = 255
//! stripe_thickness = 4
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a color is painted behind a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SpriteBackground {
    /// Nothing is painted
    #[default]
    None,
    /// Stripe along the bottom edge
    #[serde(alias = "bottom_stripe")]
    Bottom,
    /// Stripe along the top edge
    #[serde(alias = "top_stripe")]
    Top,
    /// Whole transparent area
    #[serde(alias = "full_background")]
    Full,
}

impl SpriteBackground {
    pub fn is_stripe(&self) -> bool {
        matches!(self, SpriteBackground::Bottom | SpriteBackground::Top)
    }
}

/// Background/stripe settings for one kind of color hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    /// Style used in box views
    #[serde(default)]
    pub style: SpriteBackground,
    /// Style used in the single-entity editor view
    #[serde(default)]
    pub entity_style: SpriteBackground,
    /// Alpha of stripe pixels
    pub stripe_opacity: u8,
    /// Alpha of full-background pixels
    pub background_opacity: u8,
    /// Stripe height in pixels
    pub stripe_thickness: u32,
}

impl BackgroundConfig {
    fn encounter_default() -> Self {
        Self {
            style: SpriteBackground::Full,
            entity_style: SpriteBackground::None,
            stripe_opacity: 0x5F,
            background_opacity: 0x3F,
            stripe_thickness: 4,
        }
    }

    fn tera_default() -> Self {
        Self {
            style: SpriteBackground::Top,
            entity_style: SpriteBackground::None,
            stripe_opacity: 0xAF,
            background_opacity: 0xFF,
            stripe_thickness: 4,
        }
    }
}

/// Settings read while building sprites.
///
/// The builder never changes these; a host swaps them wholesale with
/// [`SpriteBuilder::apply_settings`](crate::builder::SpriteBuilder::apply_settings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show an egg like a held item instead of fading the species under it
    #[serde(default = "default_true")]
    pub egg_as_item: bool,
    /// Draw an experience bar along the bottom edge
    #[serde(default)]
    pub experience_percent: bool,
    /// Encounter type color hint
    #[serde(default = "BackgroundConfig::encounter_default")]
    pub encounter: BackgroundConfig,
    /// Tera type color hint
    #[serde(default = "BackgroundConfig::tera_default")]
    pub tera: BackgroundConfig,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            egg_as_item: true,
            experience_percent: false,
            encounter: BackgroundConfig::encounter_default(),
            tera: BackgroundConfig::tera_default(),
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "tera.stripe_thickness")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pokesprite.toml: '{}' {}", self.field, self.message)
    }
}

impl DisplayConfig {
    /// Settings for the single-entity view, where each hint uses its
    /// `entity_style` instead of its box-view `style`.
    pub fn for_entity_view(&self) -> DisplayConfig {
        let mut config = *self;
        config.encounter.style = self.encounter.entity_style;
        config.tera.style = self.tera.entity_style;
        config
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        for (name, bg) in [("encounter", &self.encounter), ("tera", &self.tera)] {
            let uses_stripe = bg.style.is_stripe() || bg.entity_style.is_stripe();
            if uses_stripe && bg.stripe_thickness == 0 {
                errors.push(ConfigValidationError {
                    field: format!("{}.stripe_thickness", name),
                    message: "must be positive when a stripe style is selected".to_string(),
                });
            }
            if bg.stripe_thickness > u8::MAX as u32 {
                errors.push(ConfigValidationError {
                    field: format!("{}.stripe_thickness", name),
                    message: "must be at most 255".to_string(),
                });
            }
        }
        errors
    }
}
