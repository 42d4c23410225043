//! Sprite resource naming

use crate::entity::species::{self, PIKACHU};
use crate::entity::{EntityContext, SpriteKey};

/// Build the scheme-independent part of a sprite resource name.
///
/// The name is `_<species>`, then `-<form>` for a non-default form (or `f`
/// for female art of gendered species), `-<formarg>` for species whose art
/// depends on the form argument, `c` for Generation 6 cosplay Pikachu and
/// `s` for shiny art.
///
/// # Examples
///
/// ```
/// use pokesprite::art::sprite_name;
/// use pokesprite::entity::{Shiny, SpriteRequest};
///
/// let key = SpriteRequest::new(150).with_form(1).with_shiny(Shiny::Always).key();
/// assert_eq!(sprite_name(&key), "_150-1s");
/// ```
pub fn sprite_name(key: &SpriteKey) -> String {
    let form = if species::has_formless_art(key.species) { 0 } else { key.form };

    let mut name = String::with_capacity(12);
    name.push_str(&format!("_{}", key.species));
    if form != 0 {
        name.push_str(&format!("-{}", form));
    } else if key.gender == 1 && species::has_gendered_art(key.species) {
        name.push('f');
    }

    if species::has_form_argument_art(key.species) {
        name.push_str(&format!("-{}", key.form_argument));
    } else if key.species == PIKACHU && key.context == EntityContext::Gen6 && form != 0 {
        name.push('c');
    }

    if key.shiny {
        name.push('s');
    }
    name
}
