//! Entity records consumed by the sprite pipeline
//!
//! A [`SpriteRequest`] carries everything needed to pick and decorate one
//! sprite: species, form, gender, form argument, held item, egg state,
//! shininess and the game context the entity belongs to.
//!
//! # Module Structure
//!
//! - [`species`] - Species ids the pipeline special-cases
//! - [`forms`] - Form remapping and totem detection
//! - [`items`] - Held item lump classification (TM/TR icons)

pub mod forms;
pub mod items;
pub mod species;

pub use items::ItemLump;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Shiny state requested for a sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shiny {
    /// Regular coloration, no marker
    #[default]
    Never,
    /// Shiny with the star marker
    Always,
    /// Shiny with the square marker (Generation 8 only)
    #[serde(rename = "square")]
    #[value(name = "square")]
    AlwaysSquare,
}

impl Shiny {
    /// Whether shiny art and a marker should be used.
    pub fn is_shiny(&self) -> bool {
        !matches!(self, Shiny::Never)
    }
}

/// Game context an entity originates from.
///
/// Split contexts (`Gen7b`, `Gen8a`, `Gen8b`) report the generation of the
/// main series they belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityContext {
    /// No specific context
    #[default]
    None,
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
    Gen8,
    Gen9,
    /// Let's Go Pikachu/Eevee
    Gen7b,
    /// Legends: Arceus
    Gen8a,
    /// Brilliant Diamond/Shining Pearl
    Gen8b,
}

impl EntityContext {
    /// Returns the main series generation for this context (0 for `None`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pokesprite::entity::EntityContext;
    ///
    /// assert_eq!(EntityContext::Gen3.generation(), 3);
    /// assert_eq!(EntityContext::Gen8b.generation(), 8);
    /// assert_eq!(EntityContext::None.generation(), 0);
    /// ```
    pub fn generation(&self) -> u8 {
        match self {
            EntityContext::None => 0,
            EntityContext::Gen1 => 1,
            EntityContext::Gen2 => 2,
            EntityContext::Gen3 => 3,
            EntityContext::Gen4 => 4,
            EntityContext::Gen5 => 5,
            EntityContext::Gen6 => 6,
            EntityContext::Gen7 | EntityContext::Gen7b => 7,
            EntityContext::Gen8 | EntityContext::Gen8a | EntityContext::Gen8b => 8,
            EntityContext::Gen9 => 9,
        }
    }
}

/// Game version of the loaded save, only relevant where a species' form
/// depends on the cartridge (Deoxys in Generation 3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameVersion {
    #[default]
    Unknown,
    Ruby,
    Sapphire,
    Emerald,
    #[serde(rename = "firered")]
    #[value(name = "firered")]
    FireRed,
    #[serde(rename = "leafgreen")]
    #[value(name = "leafgreen")]
    LeafGreen,
    Colosseum,
    #[serde(rename = "xd")]
    #[value(name = "xd")]
    XD,
}

/// Parameters for one sprite build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteRequest {
    pub species: u16,
    #[serde(default)]
    pub form: u8,
    #[serde(default)]
    pub gender: u8,
    #[serde(default)]
    pub form_argument: u32,
    /// Held item id, 0 for none
    #[serde(default)]
    pub held_item: u16,
    #[serde(default)]
    pub is_egg: bool,
    #[serde(default)]
    pub shiny: Shiny,
    #[serde(default)]
    pub context: EntityContext,
}

impl SpriteRequest {
    /// Create a request for a species with every other field defaulted.
    pub fn new(species: u16) -> Self {
        Self { species, ..Default::default() }
    }

    pub fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn with_gender(mut self, gender: u8) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_form_argument(mut self, form_argument: u32) -> Self {
        self.form_argument = form_argument;
        self
    }

    pub fn with_item(mut self, held_item: u16) -> Self {
        self.held_item = held_item;
        self
    }

    pub fn with_egg(mut self, is_egg: bool) -> Self {
        self.is_egg = is_egg;
        self
    }

    pub fn with_shiny(mut self, shiny: Shiny) -> Self {
        self.shiny = shiny;
        self
    }

    pub fn with_context(mut self, context: EntityContext) -> Self {
        self.context = context;
        self
    }

    /// The lookup key used by the resolver for this request.
    pub fn key(&self) -> SpriteKey {
        SpriteKey {
            species: self.species,
            form: self.form,
            gender: self.gender,
            form_argument: self.form_argument,
            shiny: self.shiny.is_shiny(),
            context: self.context,
        }
    }
}

/// The subset of a request that selects base art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub species: u16,
    pub form: u8,
    pub gender: u8,
    pub form_argument: u32,
    pub shiny: bool,
    pub context: EntityContext,
}

impl SpriteKey {
    pub fn with_shiny(self, shiny: bool) -> Self {
        Self { shiny, ..self }
    }

    pub fn with_form(self, form: u8) -> Self {
        Self { form, ..self }
    }
}
