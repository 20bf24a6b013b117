use crate::ClothingItemDto;

use serde::Serialize;

/// Single clothing item response
#[derive(Debug, Serialize)]
pub struct ClothingItemResponse {
    pub item: ClothingItemDto,
}
