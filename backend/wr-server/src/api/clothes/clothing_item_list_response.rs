use crate::ClothingItemDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClothingItemListResponse {
    pub items: Vec<ClothingItemDto>,
}
