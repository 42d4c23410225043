//! Species ids with special sprite handling

pub const RATICATE: u16 = 20;
pub const PIKACHU: u16 = 25;
pub const MAROWAK: u16 = 105;
pub const HIPPOPOTAS: u16 = 449;
pub const HIPPOWDON: u16 = 450;
pub const DEOXYS: u16 = 386;
pub const MANAPHY: u16 = 490;
pub const ARCEUS: u16 = 493;
pub const UNFEZANT: u16 = 521;
pub const FRILLISH: u16 = 592;
pub const JELLICENT: u16 = 593;
pub const PYROAR: u16 = 668;
pub const SCATTERBUG: u16 = 664;
pub const SPEWPA: u16 = 665;
pub const GUMSHOOS: u16 = 735;
pub const VIKAVOLT: u16 = 738;
pub const RIBOMBEE: u16 = 743;
pub const ARAQUANID: u16 = 752;
pub const LURANTIS: u16 = 754;
pub const SALAZZLE: u16 = 758;
pub const TOGEDEMARU: u16 = 777;
pub const MIMIKYU: u16 = 778;
pub const KOMMO_O: u16 = 784;
pub const ALCREMIE: u16 = 869;

/// Species with separate art for the female form.
pub const GENDERED_ART: &[u16] = &[HIPPOPOTAS, HIPPOWDON, UNFEZANT, FRILLISH, JELLICENT, PYROAR];

/// Species whose form has no distinct art; always drawn as form 0.
pub const FORMLESS_ART: &[u16] = &[SCATTERBUG, SPEWPA];

/// Species whose art varies by form argument.
pub const FORM_ARGUMENT_ART: &[u16] = &[ALCREMIE];

pub fn has_gendered_art(species: u16) -> bool {
    GENDERED_ART.contains(&species)
}

pub fn has_formless_art(species: u16) -> bool {
    FORMLESS_ART.contains(&species)
}

pub fn has_form_argument_art(species: u16) -> bool {
    FORM_ARGUMENT_ART.contains(&species)
}
