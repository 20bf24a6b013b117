mod models;
mod outfit;

use crate::{ClothingItem, Section};

use uuid::Uuid;

pub(crate) fn item(user_id: Uuid, section: Section, name: &str) -> ClothingItem {
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

/// One item per section: top, bottom, shoes
pub(crate) fn basic_catalog() -> Vec<ClothingItem> {
    let user_id = Uuid::new_v4();
    vec![
        item(user_id, Section::Top, "white tee"),
        item(user_id, Section::Bottom, "blue jeans"),
        item(user_id, Section::Shoes, "sneakers"),
    ]
}
