//! Held item lump classification

use super::EntityContext;

/// Items that share one icon instead of having individual art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemLump {
    /// Item has its own art
    None,
    /// Technical Machine
    TechnicalMachine,
    /// Technical Record
    TechnicalRecord,
}

impl ItemLump {
    /// Classify a held item for the given context.
    ///
    /// Only Generation 8 and later draw machines with the shared icons.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokesprite::entity::{EntityContext, ItemLump};
    ///
    /// assert_eq!(ItemLump::classify(328, EntityContext::Gen8), ItemLump::TechnicalMachine);
    /// assert_eq!(ItemLump::classify(1130, EntityContext::Gen8), ItemLump::TechnicalRecord);
    /// assert_eq!(ItemLump::classify(328, EntityContext::Gen7), ItemLump::None);
    /// ```
    pub fn classify(item: u16, context: EntityContext) -> ItemLump {
        if context.generation() < 8 {
            return ItemLump::None;
        }
        match item {
            328..=419 | 618..=620 | 690..=694 => ItemLump::TechnicalMachine,
            1130..=1229 => ItemLump::TechnicalRecord,
            _ => ItemLump::None,
        }
    }
}
