use crate::{CoreError, Result as CoreResult, Section};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingItem {
    pub id: Uuid,
    pub user_id: Uuid,

    pub section: Section,
    pub name: String,
    pub item_type: String,
    pub color: String,
    pub style: String,

    /// Public URL of the processed image
    pub image_url: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClothingItem {
    pub fn new(
        user_id: Uuid,
        section: Section,
        name: String,
        item_type: String,
        color: String,
        style: String,
        image_url: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            section,
            name,
            item_type,
            color,
            style,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial metadata edit. Section and image are fixed once an item exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClothingItemChanges {
    pub name: Option<String>,
    pub item_type: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
}

impl ClothingItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.color.is_none()
            && self.style.is_none()
    }

    /// Trims every provided value and rejects blanks or values over `max_len` characters.
    pub fn validate(&self, max_len: usize) -> CoreResult<()> {
        let fields = [
            ("name", &self.name),
            ("type", &self.item_type),
            ("color", &self.color),
            ("style", &self.style),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                validate_text_field(field, value, max_len)?;
            }
        }

        if self.is_empty() {
            return Err(CoreError::field("body", "At least one field must be provided"));
        }

        Ok(())
    }

    pub fn apply(&self, item: &mut ClothingItem) {
        if let Some(name) = &self.name {
            item.name = name.trim().to_string();
        }
        if let Some(item_type) = &self.item_type {
            item.item_type = item_type.trim().to_string();
        }
        if let Some(color) = &self.color {
            item.color = color.trim().to_string();
        }
        if let Some(style) = &self.style {
            item.style = style.trim().to_string();
        }
        item.updated_at = Utc::now();
    }
}

#[track_caller]
pub fn validate_text_field(field: &str, value: &str, max_len: usize) -> CoreResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::field(field, format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::field(
            field,
            format!("{field} must be at most {max_len} characters"),
        ));
    }
    Ok(())
}
