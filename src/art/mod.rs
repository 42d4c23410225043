//! Art sets - sprite dimensions, overlay offsets and resource naming
//!
//! Each pre-rendered art library has its own canvas size, its own padding
//! for item and egg overlays and its own resource naming. An [`ArtSet`]
//! describes one library; pick one at startup and hand it to the builder.
//!
//! | Art set | Size | Item shift | Item max | Egg shift | Secondary scheme |
//! |---------|------|------------|----------|-----------|------------------|
//! | [`BoxArt`] | 68x56 | (2, 2) | 32 | (18, 1) | yes |
//! | [`CompactArt`] | 40x30 | (1, 1) | 15 | (9, 2) | no |

mod naming;

pub use naming::sprite_name;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::entity::{species, SpriteKey};

/// Resource key of the regular shiny star marker.
pub const SHINY_STAR: &str = "rare_icon_alt";

/// Resource key of the square shiny marker (Generation 8).
pub const SHINY_SQUARE: &str = "rare_icon_alt_2";

/// Dimensions, overlay placement and resource naming of an art library.
///
/// Only the layout constants and the prefixes are required; resource names
/// are derived from them.
pub trait ArtSet: Send + Sync {
    /// Width of every generated sprite.
    fn width(&self) -> u32;

    /// Height of every generated sprite.
    fn height(&self) -> u32;

    /// Minimum padding right and below a held item icon.
    fn item_shift(&self) -> (i32, i32);

    /// Largest width/height of an item icon.
    fn item_max_size(&self) -> i32;

    /// Where an egg is drawn when shown in place of a held item.
    fn egg_item_shift(&self) -> (i32, i32);

    /// Prefix of every resource in the primary scheme.
    fn prefix(&self) -> char;

    /// Prefix of the secondary scheme, if the library has one.
    fn secondary_prefix(&self) -> Option<char>;

    fn has_secondary_scheme(&self) -> bool {
        self.secondary_prefix().is_some()
    }

    fn primary_key(&self, key: &SpriteKey) -> String {
        format!("{}{}", self.prefix(), sprite_name(key))
    }

    /// Key in the secondary scheme, `None` when there is no such scheme.
    fn secondary_key(&self, key: &SpriteKey) -> Option<String> {
        self.secondary_prefix().map(|p| format!("{}{}", p, sprite_name(key)))
    }

    fn species_only_key(&self, species: u16) -> String {
        format!("{}_{}", self.prefix(), species)
    }

    fn item_key(&self, item: u16) -> String {
        format!("{}item_{}", self.prefix(), item)
    }

    fn egg_key(&self, species: u16) -> String {
        if species == species::MANAPHY {
            format!("{}_{}_e", self.prefix(), species::MANAPHY)
        } else {
            format!("{}_egg", self.prefix())
        }
    }

    /// Placeholder for art that could not be found.
    fn unknown_key(&self) -> String {
        format!("{}_unknown", self.prefix())
    }

    /// Placeholder for an empty slot (species 0).
    fn none_key(&self) -> String {
        format!("{}_0", self.prefix())
    }

    fn unknown_item_key(&self) -> String {
        format!("{}item_unk", self.prefix())
    }

    fn tm_key(&self) -> String {
        format!("{}item_tm", self.prefix())
    }

    fn tr_key(&self) -> String {
        format!("{}item_tr", self.prefix())
    }
}

/// Box sprites, 68x56.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxArt;

impl ArtSet for BoxArt {
    fn width(&self) -> u32 {
        68
    }

    fn height(&self) -> u32 {
        56
    }

    fn item_shift(&self) -> (i32, i32) {
        (2, 2)
    }

    fn item_max_size(&self) -> i32 {
        32
    }

    fn egg_item_shift(&self) -> (i32, i32) {
        (18, 1)
    }

    fn prefix(&self) -> char {
        'b'
    }

    fn secondary_prefix(&self) -> Option<char> {
        Some('c')
    }
}

/// Compact sprites, 40x30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactArt;

impl ArtSet for CompactArt {
    fn width(&self) -> u32 {
        40
    }

    fn height(&self) -> u32 {
        30
    }

    fn item_shift(&self) -> (i32, i32) {
        (1, 1)
    }

    fn item_max_size(&self) -> i32 {
        15
    }

    fn egg_item_shift(&self) -> (i32, i32) {
        (9, 2)
    }

    fn prefix(&self) -> char {
        'a'
    }

    fn secondary_prefix(&self) -> Option<char> {
        None
    }
}

/// Built-in art set selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtKind {
    /// [`BoxArt`]
    #[default]
    Box,
    /// [`CompactArt`]
    Compact,
}
