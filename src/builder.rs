//! Sprite assembly
//!
//! [`SpriteBuilder::build`] resolves the base image for a request and then
//! layers, in this order:
//!
//! 1. the egg (as a held-item-sized icon, or over a faded species)
//! 2. the held item in the bottom-right corner
//! 3. the shiny marker in the top-left corner
//!
//! Later layers sit on top of earlier ones.

use image::RgbaImage;
use rayon::prelude::*;

use crate::art::{ArtSet, SHINY_SQUARE, SHINY_STAR};
use crate::assets::ResourceProvider;
use crate::composition::{layer, layer_faded};
use crate::config::DisplayConfig;
use crate::effects::scale_opacity;
use crate::entity::{GameVersion, ItemLump, Shiny, SpriteRequest};
use crate::resolve::{prepare_key, ResolutionOutcome, Resolver};

/// Opacity of the shiny marker.
pub const SHINY_OPACITY: f64 = 0.7;

/// Opacity of the species drawn under an egg.
pub const EGG_UNDERLAYER_OPACITY: f64 = 0.33;

/// Builds sprites from one art set and one asset provider.
///
/// Settings are read-only during a build; replace them between builds with
/// [`apply_settings`](Self::apply_settings).
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use pokesprite::art::{ArtSet, BoxArt};
/// use pokesprite::assets::AssetRegistry;
/// use pokesprite::builder::SpriteBuilder;
/// use pokesprite::entity::SpriteRequest;
///
/// let assets = AssetRegistry::new().with("b_25", RgbaImage::new(68, 56));
/// let builder = SpriteBuilder::new(BoxArt, assets);
///
/// let sprite = builder.build(&SpriteRequest::new(25));
/// assert_eq!(sprite.dimensions(), (BoxArt.width(), BoxArt.height()));
/// ```
#[derive(Debug, Clone)]
pub struct SpriteBuilder<A, P> {
    art: A,
    assets: P,
    config: DisplayConfig,
    game: GameVersion,
}

impl<A: ArtSet, P: ResourceProvider> SpriteBuilder<A, P> {
    pub fn new(art: A, assets: P) -> Self {
        Self { art, assets, config: DisplayConfig::default(), game: GameVersion::Unknown }
    }

    pub fn with_config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_game(mut self, game: GameVersion) -> Self {
        self.game = game;
        self
    }

    /// Replace the display settings used by later builds.
    pub fn apply_settings(&mut self, config: DisplayConfig) {
        log::debug!("display settings replaced");
        self.config = config;
    }

    /// Set the game version of the loaded save.
    pub fn initialize(&mut self, game: GameVersion) {
        self.game = game;
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn art(&self) -> &A {
        &self.art
    }

    pub fn assets(&self) -> &P {
        &self.assets
    }

    pub fn game(&self) -> GameVersion {
        self.game
    }

    pub fn resolver(&self) -> Resolver<'_, A, P> {
        Resolver::new(&self.art, &self.assets)
    }

    /// Build the sprite for a request.
    pub fn build(&self, request: &SpriteRequest) -> RgbaImage {
        if request.species == 0 {
            return self.none();
        }
        let base = self.resolve(request).into_image();
        self.compose(base, request)
    }

    /// Resolve only the base image, with game-dependent form remapping.
    pub fn resolve(&self, request: &SpriteRequest) -> ResolutionOutcome {
        let key = prepare_key(request, self.game);
        self.resolver().resolve(&key)
    }

    /// Layer egg, item and shiny marker over an already resolved base.
    pub fn compose(&self, base: RgbaImage, request: &SpriteRequest) -> RgbaImage {
        let mut sprite = base;
        if request.is_egg {
            sprite = self.layer_egg(sprite, request.species, request.held_item != 0);
        }
        if request.held_item > 0 {
            sprite = self.layer_item(sprite, request);
        }
        if request.shiny.is_shiny() {
            sprite = self.layer_shiny(sprite, request);
        }
        sprite
    }

    /// Placeholder for an empty slot.
    pub fn none(&self) -> RgbaImage {
        self.assets.load_image(&self.art.none_key()).unwrap_or_else(|| {
            log::warn!("placeholder '{}' is missing, using a blank sprite", self.art.none_key());
            RgbaImage::new(self.art.width(), self.art.height())
        })
    }

    fn layer_egg(&self, base: RgbaImage, species: u16, has_item: bool) -> RgbaImage {
        let key = self.art.egg_key(species);
        let Some(egg) = self.assets.load_image(&key) else {
            log::warn!("egg sprite '{}' is missing", key);
            return base;
        };

        if self.config.egg_as_item && !has_item {
            let (x, y) = self.art.egg_item_shift();
            layer(&base, &egg, x, y)
        } else {
            let faded = scale_opacity(&base, EGG_UNDERLAYER_OPACITY);
            layer(&faded, &egg, 0, 0)
        }
    }

    fn layer_item(&self, base: RgbaImage, request: &SpriteRequest) -> RgbaImage {
        let item = match ItemLump::classify(request.held_item, request.context) {
            ItemLump::TechnicalMachine => self.assets.load_image(&self.art.tm_key()),
            ItemLump::TechnicalRecord => self.assets.load_image(&self.art.tr_key()),
            ItemLump::None => self
                .assets
                .load_image(&self.art.item_key(request.held_item))
                .or_else(|| self.assets.load_image(&self.art.unknown_item_key())),
        };
        let Some(item) = item else {
            log::warn!("no icon for held item {}", request.held_item);
            return base;
        };

        // Bottom right, pulled in by a quarter of the unused icon margin
        let (w, h) = (item.width() as i32, item.height() as i32);
        let (shift_x, shift_y) = self.art.item_shift();
        let x = base.width() as i32 - w - ((self.art.item_max_size() - w) / 4) - shift_x;
        let y = base.height() as i32 - h - shift_y;
        layer(&base, &item, x, y)
    }

    fn layer_shiny(&self, base: RgbaImage, request: &SpriteRequest) -> RgbaImage {
        let mut shiny = request.shiny;
        if shiny == Shiny::AlwaysSquare && request.context.generation() != 8 {
            shiny = Shiny::Always;
        }
        let key = if shiny == Shiny::AlwaysSquare { SHINY_SQUARE } else { SHINY_STAR };

        match self.assets.load_image(key) {
            Some(marker) => layer_faded(&base, &marker, 0, 0, SHINY_OPACITY),
            None => {
                log::warn!("shiny marker '{}' is missing", key);
                base
            }
        }
    }
}

impl<A, P> SpriteBuilder<A, P>
where
    A: ArtSet,
    P: ResourceProvider + Sync,
{
    /// Build many sprites in parallel. Output order matches `requests`.
    pub fn build_all(&self, requests: &[SpriteRequest]) -> Vec<RgbaImage> {
        requests.par_iter().map(|request| self.build(request)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::{BoxArt, CompactArt};
    use crate::assets::AssetRegistry;
    use crate::entity::EntityContext;
    use image::Rgba;

    fn solid(w: u32, h: u32, v: u8) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([v, v, v, 255]))
    }

    fn compact_builder(assets: AssetRegistry) -> SpriteBuilder<CompactArt, AssetRegistry> {
        SpriteBuilder::new(CompactArt, assets)
    }

    #[test]
    fn test_species_zero_uses_none_placeholder() {
        let builder = compact_builder(AssetRegistry::new().with("a_0", solid(40, 30, 1)));
        assert_eq!(builder.build(&SpriteRequest::new(0)), solid(40, 30, 1));

        let builder = compact_builder(AssetRegistry::new());
        assert_eq!(builder.build(&SpriteRequest::new(0)), RgbaImage::new(40, 30));
    }

    #[test]
    fn test_item_position() {
        let assets = AssetRegistry::new()
            .with("a_1", RgbaImage::new(40, 30))
            .with("aitem_50", solid(8, 6, 9));
        let sprite = compact_builder(assets).build(&SpriteRequest::new(1).with_item(50));

        // x = 40 - 8 - (15 - 8) / 4 - 1 = 30, y = 30 - 6 - 1 = 23
        assert_eq!(*sprite.get_pixel(30, 23), Rgba([9, 9, 9, 255]));
        assert_eq!(*sprite.get_pixel(37, 28), Rgba([9, 9, 9, 255]));
        assert_eq!(sprite.get_pixel(29, 23)[3], 0);
        assert_eq!(sprite.get_pixel(38, 28)[3], 0);
        assert_eq!(sprite.get_pixel(37, 29)[3], 0);
    }

    #[test]
    fn test_unknown_item_icon() {
        let assets = AssetRegistry::new()
            .with("a_1", RgbaImage::new(40, 30))
            .with("aitem_unk", solid(15, 15, 7));
        let sprite = compact_builder(assets).build(&SpriteRequest::new(1).with_item(9999));
        // x = 40 - 15 - 0 - 1 = 24, y = 30 - 15 - 1 = 14
        assert_eq!(*sprite.get_pixel(24, 14), Rgba([7, 7, 7, 255]));
    }

    #[test]
    fn test_machine_items_use_lump_icons() {
        let assets = AssetRegistry::new()
            .with("a_1", RgbaImage::new(40, 30))
            .with("aitem_400", solid(15, 15, 3))
            .with("aitem_tm", solid(15, 15, 4));
        let builder = compact_builder(assets);

        let gen8 = builder.build(&SpriteRequest::new(1).with_item(400).with_context(EntityContext::Gen8));
        assert_eq!(*gen8.get_pixel(24, 14), Rgba([4, 4, 4, 255]));

        let gen7 = builder.build(&SpriteRequest::new(1).with_item(400).with_context(EntityContext::Gen7));
        assert_eq!(*gen7.get_pixel(24, 14), Rgba([3, 3, 3, 255]));
    }

    #[test]
    fn test_missing_item_icon_is_skipped() {
        let base = solid(40, 30, 5);
        let assets = AssetRegistry::new().with("a_1", base.clone());
        assert_eq!(compact_builder(assets).build(&SpriteRequest::new(1).with_item(50)), base);
    }

    #[test]
    fn test_egg_under_item_fades_species() {
        let assets = AssetRegistry::new()
            .with("a_1", solid(40, 30, 100))
            .with("a_egg", RgbaImage::new(40, 30))
            .with("aitem_50", RgbaImage::new(2, 2));
        let sprite = compact_builder(assets).build(&SpriteRequest::new(1).with_egg(true).with_item(50));
        // 255 * 0.33 = 84.15
        assert_eq!(*sprite.get_pixel(0, 0), Rgba([100, 100, 100, 84]));
    }

    #[test]
    fn test_egg_not_as_item_when_disabled() {
        let mut config = DisplayConfig::default();
        config.egg_as_item = false;
        let egg = solid(2, 2, 50);
        let assets = AssetRegistry::new().with("a_1", solid(40, 30, 100)).with("a_egg", egg.clone());
        let builder = compact_builder(assets).with_config(config);

        let sprite = builder.build(&SpriteRequest::new(1).with_egg(true));
        let expected = layer(&scale_opacity(&solid(40, 30, 100), EGG_UNDERLAYER_OPACITY), &egg, 0, 0);
        assert_eq!(sprite, expected);
    }

    #[test]
    fn test_apply_settings_replaces_config() {
        let mut builder = compact_builder(AssetRegistry::new());
        let mut config = DisplayConfig::default();
        config.experience_percent = true;
        builder.apply_settings(config);
        assert!(builder.config().experience_percent);

        builder.initialize(GameVersion::Emerald);
        assert_eq!(builder.game(), GameVersion::Emerald);
    }

    #[test]
    fn test_square_marker_kept_in_gen8() {
        let assets = AssetRegistry::new()
            .with("b_1", RgbaImage::new(68, 56))
            .with(SHINY_STAR, solid(1, 1, 10))
            .with(SHINY_SQUARE, solid(1, 1, 20));
        let builder = SpriteBuilder::new(BoxArt, assets);

        let req = SpriteRequest::new(1).with_shiny(Shiny::AlwaysSquare).with_context(EntityContext::Gen8a);
        // The plain art is used since no shiny art exists; the marker still shows
        let sprite = builder.build(&req);
        assert_eq!(*sprite.get_pixel(0, 0), Rgba([20, 20, 20, 178]));
    }

    #[test]
    fn test_build_all_preserves_order() {
        let assets = AssetRegistry::new()
            .with("a_1", solid(40, 30, 1))
            .with("a_2", solid(40, 30, 2))
            .with("a_3", solid(40, 30, 3));
        let builder = compact_builder(assets);

        let requests: Vec<_> = [3, 1, 2, 1].into_iter().map(SpriteRequest::new).collect();
        let sprites = builder.build_all(&requests);
        let firsts: Vec<u8> = sprites.iter().map(|s| s.get_pixel(0, 0)[0]).collect();
        assert_eq!(firsts, vec![3, 1, 2, 1]);
    }
}
