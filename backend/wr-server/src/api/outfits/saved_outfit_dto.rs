use crate::ClothingItemDto;

use wr_core::{ClothingItem, SavedOutfit};

use serde::Serialize;

/// A saved outfit with its items resolved from the catalog. Items deleted
/// since the outfit was saved come back as `null`.
#[derive(Debug, Serialize)]
pub struct SavedOutfitDto {
    pub id: String,
    pub top_item_id: String,
    pub bottom_item_id: String,
    pub shoes_item_id: String,
    pub top: Option<ClothingItemDto>,
    pub bottom: Option<ClothingItemDto>,
    pub shoes: Option<ClothingItemDto>,
    pub created_at: i64,
}

impl SavedOutfitDto {
    pub fn resolve(outfit: SavedOutfit, catalog: &[ClothingItem]) -> Self {
        let find = |id| {
            catalog
                .iter()
                .find(|item| item.id == id)
                .map(ClothingItemDto::from)
        };

        Self {
            id: outfit.id.to_string(),
            top_item_id: outfit.top_item_id.to_string(),
            bottom_item_id: outfit.bottom_item_id.to_string(),
            shoes_item_id: outfit.shoes_item_id.to_string(),
            top: find(outfit.top_item_id),
            bottom: find(outfit.bottom_item_id),
            shoes: find(outfit.shoes_item_id),
            created_at: outfit.created_at.timestamp(),
        }
    }
}
