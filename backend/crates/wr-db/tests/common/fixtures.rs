use wr_core::{ClothingItem, OutfitTriple, Section};

use uuid::Uuid;

/// Creates a clothing item with sensible defaults
pub fn create_test_item(user_id: Uuid, section: Section, name: &str) -> ClothingItem {
    ClothingItem::new(
        user_id,
        section,
        name.to_string(),
        "casual".to_string(),
        "navy".to_string(),
        "classic".to_string(),
        format!("http://localhost:8000/images/clothes/{user_id}/{name}.png"),
    )
}

pub fn random_triple() -> OutfitTriple {
    OutfitTriple {
        top: Uuid::new_v4(),
        bottom: Uuid::new_v4(),
        shoes: Uuid::new_v4(),
    }
}
