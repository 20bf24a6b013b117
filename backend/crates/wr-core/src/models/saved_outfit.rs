use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Item identifiers of a complete outfit, one per section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OutfitTriple {
    pub top: Uuid,
    pub bottom: Uuid,
    pub shoes: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub user_id: Uuid,

    pub top_item_id: Uuid,
    pub bottom_item_id: Uuid,
    pub shoes_item_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl SavedOutfit {
    pub fn new(user_id: Uuid, triple: OutfitTriple) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            top_item_id: triple.top,
            bottom_item_id: triple.bottom,
            shoes_item_id: triple.shoes,
            created_at: Utc::now(),
        }
    }

    pub fn triple(&self) -> OutfitTriple {
        OutfitTriple {
            top: self.top_item_id,
            bottom: self.bottom_item_id,
            shoes: self.shoes_item_id,
        }
    }
}
