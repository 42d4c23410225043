//! Form remapping applied before base art lookup
//!
//! Some forms only make sense relative to the game or generation they were
//! read from. These helpers translate them to the index the art library uses,
//! and identify totem forms that are drawn as their base form plus a glow.

use super::species::*;
use super::{EntityContext, GameVersion};

/// Form value used when a form has no art at all.
pub const UNRECOGNIZED_FORM: u8 = u8::MAX;

/// Deoxys' form in Generation 3 is decided by the cartridge, not the entity.
pub fn deoxys_form(game: GameVersion) -> u8 {
    match game {
        GameVersion::FireRed => 1,   // Attack
        GameVersion::LeafGreen => 2, // Defense
        GameVersion::Emerald => 3,   // Speed
        _ => 0,
    }
}

/// Realign a Generation 4 Arceus form to the later type ordering.
///
/// Index 9 is the Curse type, which only exists in Generation 4 and has no
/// art, so it maps to [`UNRECOGNIZED_FORM`].
pub fn arceus_form_gen4(form: u8) -> u8 {
    match form {
        9 => UNRECOGNIZED_FORM,
        f if f > 9 => f - 1,
        f => f,
    }
}

/// Apply context-dependent form remapping for a species.
pub fn normalize_form(species: u16, form: u8, context: EntityContext, game: GameVersion) -> u8 {
    match (context, species) {
        (EntityContext::Gen3, DEOXYS) => deoxys_form(game),
        (EntityContext::Gen4, ARCEUS) => arceus_form_gen4(form),
        _ => form,
    }
}

/// Whether the species/form is a totem that has no art of its own.
///
/// Totem forms only exist in the Generation 7 games; later generations reuse
/// some of those form indexes for unrelated forms.
pub fn is_totem_form(species: u16, form: u8, context: EntityContext) -> bool {
    if context != EntityContext::Gen7 {
        return false;
    }
    match species {
        RATICATE | MAROWAK => form == 2,
        MIMIKYU => form == 2 || form == 3,
        GUMSHOOS | VIKAVOLT | RIBOMBEE | ARAQUANID | LURANTIS | SALAZZLE | TOGEDEMARU
        | KOMMO_O => form == 1,
        _ => false,
    }
}

/// The form whose art a totem form is drawn with.
pub fn totem_base_form(species: u16, form: u8) -> u8 {
    match species {
        MIMIKYU => form.saturating_sub(2),
        // Alolan totems
        RATICATE | MAROWAK => 1,
        _ => 0,
    }
}
