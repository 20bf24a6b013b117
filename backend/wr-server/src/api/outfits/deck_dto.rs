use crate::ClothingItemDto;

use wr_core::{DeckPosition, SectionDeck};

use serde::Serialize;

/// One shuffled section for manual browsing
#[derive(Debug, Serialize)]
pub struct DeckDto {
    pub section: String,
    pub items: Vec<ClothingItemDto>,
    pub position: DeckPosition,
}

impl From<SectionDeck> for DeckDto {
    fn from(deck: SectionDeck) -> Self {
        Self {
            section: deck.section.as_str().to_string(),
            items: deck.items.into_iter().map(ClothingItemDto::from).collect(),
            position: deck.position,
        }
    }
}
