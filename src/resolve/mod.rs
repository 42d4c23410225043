//! Base image resolution
//!
//! A missing asset is never an error here. The [`Resolver`] walks a fixed
//! fallback chain and always ends with something drawable, reporting how it
//! got there through [`ResolutionOutcome`].
//!
//! # Module Structure
//!
//! - [`state`] - States, transitions and outcomes
//! - [`resolver`] - The chain itself

pub mod resolver;
pub mod state;

pub use resolver::{totem_glow, Resolver, TOTEM_GLOW, UNKNOWN_FORM_OPACITY};
pub use state::{ResolutionOutcome, ResolveState, Scheme, Transition};

use crate::entity::forms::normalize_form;
use crate::entity::{GameVersion, SpriteKey, SpriteRequest};

/// Lookup key for a request after game-dependent form remapping.
///
/// # Examples
///
/// ```
/// use pokesprite::entity::{EntityContext, GameVersion, SpriteRequest};
/// use pokesprite::resolve::prepare_key;
///
/// // Generation 3 Deoxys takes its form from the cartridge
/// let req = SpriteRequest::new(386).with_context(EntityContext::Gen3);
/// assert_eq!(prepare_key(&req, GameVersion::Emerald).form, 3);
/// ```
pub fn prepare_key(request: &SpriteRequest, game: GameVersion) -> SpriteKey {
    let key = request.key();
    key.with_form(normalize_form(key.species, key.form, key.context, game))
}
