use crate::ClothingItemDto;

use wr_core::{OutfitSelection, SelectionNotice};

use serde::Serialize;

/// Result of a random or AI-assisted selection. Unselected slots are `null`.
#[derive(Debug, Serialize)]
pub struct OutfitSelectionResponse {
    pub top: Option<ClothingItemDto>,
    pub bottom: Option<ClothingItemDto>,
    pub shoes: Option<ClothingItemDto>,
    pub notices: Vec<NoticeDto>,
}

#[derive(Debug, Serialize)]
pub struct NoticeDto {
    #[serde(flatten)]
    pub notice: SelectionNotice,
    pub message: String,
}

impl From<OutfitSelection> for OutfitSelectionResponse {
    fn from(selection: OutfitSelection) -> Self {
        Self {
            top: selection.top.into_item().map(ClothingItemDto::from),
            bottom: selection.bottom.into_item().map(ClothingItemDto::from),
            shoes: selection.shoes.into_item().map(ClothingItemDto::from),
            notices: selection
                .notices
                .into_iter()
                .map(|notice| NoticeDto {
                    message: notice.to_string(),
                    notice,
                })
                .collect(),
        }
    }
}
