use crate::SavedOutfitDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SavedOutfitListResponse {
    pub outfits: Vec<SavedOutfitDto>,
}
