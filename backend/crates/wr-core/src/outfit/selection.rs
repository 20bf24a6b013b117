use crate::{ClothingItem, OutfitTriple, Section};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One outfit slot. `Unselected` is a real state, never a sentinel item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum SlotPick {
    #[default]
    Unselected,
    Selected(ClothingItem),
}

impl SlotPick {
    pub fn as_item(&self) -> Option<&ClothingItem> {
        match self {
            Self::Unselected => None,
            Self::Selected(item) => Some(item),
        }
    }

    pub fn into_item(self) -> Option<ClothingItem> {
        match self {
            Self::Unselected => None,
            Self::Selected(item) => Some(item),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }

    pub fn item_id(&self) -> Option<Uuid> {
        self.as_item().map(|item| item.id)
    }
}

impl From<Option<ClothingItem>> for SlotPick {
    fn from(item: Option<ClothingItem>) -> Self {
        match item {
            Some(item) => Self::Selected(item),
            None => Self::Unselected,
        }
    }
}

/// Why a slot ended up unselected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionNotice {
    EmptySection { section: Section },
    UnknownItem { section: Section, id: String },
    NoSuggestion { section: Section },
}

impl fmt::Display for SelectionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySection { section } => write!(f, "No items in section {section}"),
            Self::UnknownItem { section, id } => {
                write!(f, "Suggested {section} '{id}' is not in your {section} items")
            }
            Self::NoSuggestion { section } => write!(f, "No {section} suggestion was returned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutfitSelection {
    pub top: SlotPick,
    pub bottom: SlotPick,
    pub shoes: SlotPick,
    pub notices: Vec<SelectionNotice>,
}

impl OutfitSelection {
    pub fn slot(&self, section: Section) -> &SlotPick {
        match section {
            Section::Top => &self.top,
            Section::Bottom => &self.bottom,
            Section::Shoes => &self.shoes,
        }
    }

    pub(crate) fn set_slot(&mut self, section: Section, pick: SlotPick) {
        match section {
            Section::Top => self.top = pick,
            Section::Bottom => self.bottom = pick,
            Section::Shoes => self.shoes = pick,
        }
    }

    pub fn is_complete(&self) -> bool {
        Section::ALL
            .iter()
            .all(|section| self.slot(*section).is_selected())
    }

    /// Identifier triple, present only when every slot is selected
    pub fn triple(&self) -> Option<OutfitTriple> {
        Some(OutfitTriple {
            top: self.top.item_id()?,
            bottom: self.bottom.item_id()?,
            shoes: self.shoes.item_id()?,
        })
    }
}
