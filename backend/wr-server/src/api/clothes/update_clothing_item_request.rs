use wr_core::ClothingItemChanges;

use serde::Deserialize;

/// Metadata edit. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateClothingItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl From<UpdateClothingItemRequest> for ClothingItemChanges {
    fn from(request: UpdateClothingItemRequest) -> Self {
        Self {
            name: request.name,
            item_type: request.item_type,
            color: request.color,
            style: request.style,
        }
    }
}
