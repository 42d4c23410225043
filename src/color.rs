//! Type colors and hex color parsing
//!
//! Hex colors come in the usual `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`
//! forms. Type colors are the fixed palette used for tera and type hints
//! painted behind sprites.

use clap::ValueEnum;
use image::Rgba;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Elemental type of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    /// Tera-only type
    Stellar,
}

impl ElementType {
    /// Color of the type as drawn behind sprites.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::Rgba;
    /// use pokesprite::color::ElementType;
    ///
    /// assert_eq!(ElementType::Fire.sprite_color(), Rgba([230, 40, 41, 255]));
    /// ```
    pub fn sprite_color(&self) -> Rgba<u8> {
        let [r, g, b] = match self {
            ElementType::Normal => [159, 161, 159],
            ElementType::Fighting => [255, 128, 0],
            ElementType::Flying => [129, 185, 239],
            ElementType::Poison => [143, 65, 203],
            ElementType::Ground => [145, 81, 33],
            ElementType::Rock => [175, 169, 129],
            ElementType::Bug => [145, 161, 25],
            ElementType::Ghost => [112, 65, 112],
            ElementType::Steel => [96, 161, 184],
            ElementType::Fire => [230, 40, 41],
            ElementType::Water => [41, 128, 239],
            ElementType::Grass => [63, 161, 41],
            ElementType::Electric => [250, 192, 0],
            ElementType::Psychic => [239, 65, 121],
            ElementType::Ice => [63, 216, 255],
            ElementType::Dragon => [80, 97, 225],
            ElementType::Dark => [80, 65, 63],
            ElementType::Fairy => [239, 113, 239],
            ElementType::Stellar => [255, 255, 224],
        };
        Rgba([r, g, b, 255])
    }
}

/// Parse a hex color string (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`).
///
/// # Examples
///
/// ```
/// use pokesprite::color::parse_hex_color;
///
/// assert_eq!(parse_hex_color("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// assert_eq!(parse_hex_color("#1E90FF80").unwrap(), image::Rgba([30, 144, 255, 128]));
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }

    match hex.len() {
        3 | 4 => {
            // Short form, each digit doubled
            let mut channels = [255u8; 4];
            for (i, c) in hex.chars().enumerate() {
                channels[i] = parse_hex_digit(c)? * 17;
            }
            Ok(Rgba(channels))
        }
        6 | 8 => {
            let mut channels = [255u8; 4];
            for i in 0..hex.len() / 2 {
                channels[i] = parse_hex_pair(&hex[i * 2..i * 2 + 2])?;
            }
            Ok(Rgba(channels))
        }
        len => Err(ColorError::InvalidLength(len)),
    }
}

fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c))
}

fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(s, 16).map_err(|_| {
        let bad = s.chars().find(|c| !c.is_ascii_hexdigit()).unwrap_or('?');
        ColorError::InvalidHex(bad)
    })
}
