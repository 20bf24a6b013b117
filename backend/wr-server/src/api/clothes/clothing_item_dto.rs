use wr_core::ClothingItem;

use serde::{Deserialize, Serialize};

/// Clothing item DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItemDto {
    pub id: String,
    pub section: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub color: String,
    pub style: String,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ClothingItem> for ClothingItemDto {
    fn from(item: ClothingItem) -> Self {
        Self {
            id: item.id.to_string(),
            section: item.section.as_str().to_string(),
            name: item.name,
            item_type: item.item_type,
            color: item.color,
            style: item.style,
            image_url: item.image_url,
            created_at: item.created_at.timestamp(),
            updated_at: item.updated_at.timestamp(),
        }
    }
}

impl From<&ClothingItem> for ClothingItemDto {
    fn from(item: &ClothingItem) -> Self {
        Self::from(item.clone())
    }
}
