//! Base image fallback chain

use image::{Rgba, RgbaImage};

use super::state::{ResolutionOutcome, ResolveState, Scheme, Transition};
use crate::art::ArtSet;
use crate::assets::ResourceProvider;
use crate::composition::{layer_faded, layer_matched};
use crate::effects::sprite_glow;
use crate::entity::forms::{is_totem_form, totem_base_form};
use crate::entity::SpriteKey;

/// Glow drawn around totem forms.
pub const TOTEM_GLOW: Rgba<u8> = Rgba([255, 165, 0, 255]);

/// Opacity of the unknown placeholder drawn over species-only art.
pub const UNKNOWN_FORM_OPACITY: f64 = 0.5;

/// Finds the base image for a sprite key, falling back step by step until
/// something can be drawn.
///
/// ```text
/// TotemCheck -> PrimaryLookup -> SecondaryLookup -> ShinyRetry -> SpeciesOnlyRetry -> Unknown
/// ```
///
/// `SecondaryLookup` is skipped for art sets without a secondary scheme and
/// `ShinyRetry` for non-shiny keys.
pub struct Resolver<'a, A: ?Sized, P: ?Sized> {
    art: &'a A,
    assets: &'a P,
}

impl<'a, A, P> Resolver<'a, A, P>
where
    A: ArtSet + ?Sized,
    P: ResourceProvider + ?Sized,
{
    pub fn new(art: &'a A, assets: &'a P) -> Self {
        Self { art, assets }
    }

    /// Run the chain from [`ResolveState::TotemCheck`] to an outcome.
    pub fn resolve(&self, key: &SpriteKey) -> ResolutionOutcome {
        let mut state = ResolveState::TotemCheck;
        loop {
            match self.step(state, key) {
                Transition::Next(next) => {
                    log::debug!("species {} form {}: {:?} -> {:?}", key.species, key.form, state, next);
                    state = next;
                }
                Transition::Done(outcome) => return outcome,
            }
        }
    }

    /// Perform a single state's work.
    pub fn step(&self, state: ResolveState, key: &SpriteKey) -> Transition {
        match state {
            ResolveState::TotemCheck => {
                if !is_totem_form(key.species, key.form, key.context) {
                    return Transition::Next(ResolveState::PrimaryLookup);
                }
                let base = key.with_form(totem_base_form(key.species, key.form));
                match self.lookup(&base) {
                    Some((image, via)) => {
                        Transition::Done(ResolutionOutcome::Resolved { image: totem_glow(&image), via })
                    }
                    None => Transition::Next(after_miss(key)),
                }
            }
            ResolveState::PrimaryLookup => match self.load_primary(key) {
                Some(image) => Transition::Done(ResolutionOutcome::Resolved { image, via: Scheme::Primary }),
                None if self.art.has_secondary_scheme() => Transition::Next(ResolveState::SecondaryLookup),
                None => Transition::Next(after_miss(key)),
            },
            ResolveState::SecondaryLookup => match self.load_secondary(key) {
                Some(image) => {
                    Transition::Done(ResolutionOutcome::Resolved { image, via: Scheme::Secondary })
                }
                None => Transition::Next(after_miss(key)),
            },
            ResolveState::ShinyRetry => match self.lookup(&key.with_shiny(false)) {
                Some((image, _)) => Transition::Done(ResolutionOutcome::FallbackNoShiny { image }),
                None => Transition::Next(ResolveState::SpeciesOnlyRetry),
            },
            ResolveState::SpeciesOnlyRetry => {
                match self.assets.load_image(&self.art.species_only_key(key.species)) {
                    Some(image) => {
                        let image = layer_faded(&image, &self.unknown(), 0, 0, UNKNOWN_FORM_OPACITY);
                        Transition::Done(ResolutionOutcome::FallbackNoForm { image })
                    }
                    None => Transition::Next(ResolveState::Unknown),
                }
            }
            ResolveState::Unknown => {
                Transition::Done(ResolutionOutcome::FallbackUnknown { image: self.unknown() })
            }
        }
    }

    /// The unknown placeholder, or a blank sprite when even that is missing.
    pub fn unknown(&self) -> RgbaImage {
        self.assets.load_image(&self.art.unknown_key()).unwrap_or_else(|| {
            log::warn!("placeholder '{}' is missing, using a blank sprite", self.art.unknown_key());
            RgbaImage::new(self.art.width(), self.art.height())
        })
    }

    fn load_primary(&self, key: &SpriteKey) -> Option<RgbaImage> {
        self.assets.load_image(&self.art.primary_key(key))
    }

    fn load_secondary(&self, key: &SpriteKey) -> Option<RgbaImage> {
        self.art.secondary_key(key).and_then(|name| self.assets.load_image(&name))
    }

    // Primary then secondary scheme
    fn lookup(&self, key: &SpriteKey) -> Option<(RgbaImage, Scheme)> {
        self.load_primary(key)
            .map(|image| (image, Scheme::Primary))
            .or_else(|| self.load_secondary(key).map(|image| (image, Scheme::Secondary)))
    }
}

fn after_miss(key: &SpriteKey) -> ResolveState {
    if key.shiny {
        ResolveState::ShinyRetry
    } else {
        ResolveState::SpeciesOnlyRetry
    }
}

/// Base art with a hollow glow drawn around it.
pub fn totem_glow(base: &RgbaImage) -> RgbaImage {
    let glow = sprite_glow(base, TOTEM_GLOW, true);
    layer_matched(base, &glow)
}
