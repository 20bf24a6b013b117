use crate::SavedOutfitDto;

use wr_core::{ClothingItem, OutfitTriple, SavedOutfit, Section};

use uuid::Uuid;

fn item(user_id: Uuid, section: Section, name: &str) -> ClothingItem {
    ClothingItem::new(
        user_id,
        section,
        name.to_string(),
        "casual".to_string(),
        "black".to_string(),
        "minimal".to_string(),
        format!("http://localhost/images/{name}.png"),
    )
}

#[test]
fn given_full_catalog_when_resolved_then_all_items_present() {
    // Given
    let user_id = Uuid::new_v4();
    let catalog = vec![
        item(user_id, Section::Top, "tee"),
        item(user_id, Section::Bottom, "jeans"),
        item(user_id, Section::Shoes, "boots"),
    ];
    let outfit = SavedOutfit::new(
        user_id,
        OutfitTriple {
            top: catalog[0].id,
            bottom: catalog[1].id,
            shoes: catalog[2].id,
        },
    );

    // When
    let dto = SavedOutfitDto::resolve(outfit, &catalog);

    // Then
    assert_eq!(dto.top.map(|i| i.name).as_deref(), Some("tee"));
    assert_eq!(dto.bottom.map(|i| i.name).as_deref(), Some("jeans"));
    assert_eq!(dto.shoes.map(|i| i.name).as_deref(), Some("boots"));
}

#[test]
fn given_deleted_item_when_resolved_then_slot_is_none_but_id_kept() {
    // Given
    let user_id = Uuid::new_v4();
    let catalog = vec![item(user_id, Section::Top, "tee")];
    let missing = Uuid::new_v4();
    let outfit = SavedOutfit::new(
        user_id,
        OutfitTriple {
            top: catalog[0].id,
            bottom: missing,
            shoes: missing,
        },
    );

    // When
    let dto = SavedOutfitDto::resolve(outfit, &catalog);

    // Then
    assert!(dto.top.is_some());
    assert!(dto.bottom.is_none());
    assert_eq!(dto.bottom_item_id, missing.to_string());
}
