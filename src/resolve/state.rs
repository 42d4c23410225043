//! Resolver states and outcomes

use image::RgbaImage;

/// Naming scheme a base image was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Primary,
    Secondary,
}

/// Step of the base image fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveState {
    /// Totem forms are drawn from their base form plus a glow
    TotemCheck,
    /// Full key in the primary scheme
    PrimaryLookup,
    /// Full key in the secondary scheme, when the art set has one
    SecondaryLookup,
    /// Both schemes again with the shiny bit cleared
    ShinyRetry,
    /// Species-only key, form and gender ignored
    SpeciesOnlyRetry,
    /// Nothing matched
    Unknown,
}

/// Result of one transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Next(ResolveState),
    Done(ResolutionOutcome),
}

/// How a base image was obtained.
///
/// Every variant carries a usable image; a miss is never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// Exact art for the requested key (totem glow already applied)
    Resolved { image: RgbaImage, via: Scheme },
    /// Non-shiny art used for a shiny request
    FallbackNoShiny { image: RgbaImage },
    /// Species-only art under a faded unknown placeholder
    FallbackNoForm { image: RgbaImage },
    /// The unknown placeholder itself
    FallbackUnknown { image: RgbaImage },
}

impl ResolutionOutcome {
    pub fn image(&self) -> &RgbaImage {
        match self {
            ResolutionOutcome::Resolved { image, .. }
            | ResolutionOutcome::FallbackNoShiny { image }
            | ResolutionOutcome::FallbackNoForm { image }
            | ResolutionOutcome::FallbackUnknown { image } => image,
        }
    }

    pub fn into_image(self) -> RgbaImage {
        match self {
            ResolutionOutcome::Resolved { image, .. }
            | ResolutionOutcome::FallbackNoShiny { image }
            | ResolutionOutcome::FallbackNoForm { image }
            | ResolutionOutcome::FallbackUnknown { image } => image,
        }
    }

    /// Whether the exact requested art was found.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved { .. })
    }
}
