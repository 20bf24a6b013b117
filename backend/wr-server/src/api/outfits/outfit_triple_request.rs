use crate::ApiError;

use wr_core::OutfitTriple;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use uuid::Uuid;

/// Item ids of a complete outfit. Used as the toggle body and the status query.
#[derive(Debug, Deserialize)]
pub struct OutfitTripleRequest {
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
    #[serde(default)]
    pub shoes: Option<String>,
}

impl OutfitTripleRequest {
    /// All three ids must be present and well-formed.
    #[track_caller]
    pub fn triple(&self) -> Result<OutfitTriple, ApiError> {
        Ok(OutfitTriple {
            top: parse_slot("top", self.top.as_deref())?,
            bottom: parse_slot("bottom", self.bottom.as_deref())?,
            shoes: parse_slot("shoes", self.shoes.as_deref())?,
        })
    }
}

#[track_caller]
fn parse_slot(field: &str, value: Option<&str>) -> Result<Uuid, ApiError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation {
            message: "A top, bottom and shoes must all be selected to save an outfit".to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Uuid::parse_str(value).map_err(|e| ApiError::Validation {
        message: format!("Invalid {field} id: {e}"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
