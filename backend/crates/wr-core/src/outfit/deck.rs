use crate::{ClothingItem, Section};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position within a deck. `Empty` means "nothing chosen" and is part of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum DeckPosition {
    #[default]
    Empty,
    At(usize),
}

/// Shuffled items of one section for manual browsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionDeck {
    pub section: Section,
    pub items: Vec<ClothingItem>,
    pub position: DeckPosition,
}

impl SectionDeck {
    /// Keeps only `section` items and Fisher-Yates shuffles them.
    pub fn shuffled<R: Rng + ?Sized>(
        section: Section,
        catalog: &[ClothingItem],
        rng: &mut R,
    ) -> Self {
        let mut items: Vec<ClothingItem> = catalog
            .iter()
            .filter(|item| item.section == section)
            .cloned()
            .collect();
        items.shuffle(rng);

        Self {
            section,
            items,
            position: DeckPosition::Empty,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&ClothingItem> {
        match self.position {
            DeckPosition::Empty => None,
            DeckPosition::At(index) => self.items.get(index),
        }
    }

    /// Empty -> At(0) -> ... -> At(n-1) -> Empty
    pub fn next(&mut self) -> DeckPosition {
        self.position = match self.position {
            DeckPosition::Empty if self.items.is_empty() => DeckPosition::Empty,
            DeckPosition::Empty => DeckPosition::At(0),
            DeckPosition::At(index) if index + 1 < self.items.len() => {
                DeckPosition::At(index + 1)
            }
            DeckPosition::At(_) => DeckPosition::Empty,
        };
        self.position
    }

    pub fn prev(&mut self) -> DeckPosition {
        self.position = match self.position {
            DeckPosition::Empty if self.items.is_empty() => DeckPosition::Empty,
            DeckPosition::Empty => DeckPosition::At(self.items.len() - 1),
            DeckPosition::At(0) => DeckPosition::Empty,
            DeckPosition::At(index) => DeckPosition::At(index - 1),
        };
        self.position
    }

    pub fn reset(&mut self) {
        self.position = DeckPosition::Empty;
    }

    /// Moves to the item with `id`. Unknown ids leave the position unchanged.
    pub fn select_by_id(&mut self, id: Uuid) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.position = DeckPosition::At(index);
                true
            }
            None => false,
        }
    }

    /// Jumps to a uniformly random item. No-op on an empty deck.
    pub fn random_position<R: Rng + ?Sized>(&mut self, rng: &mut R) -> DeckPosition {
        if !self.items.is_empty() {
            self.position = DeckPosition::At(rng.random_range(0..self.items.len()));
        }
        self.position
    }
}
