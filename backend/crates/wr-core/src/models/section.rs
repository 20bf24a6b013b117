use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Clothing category. Every catalog item and every outfit slot is one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Top,
    Bottom,
    Shoes,
}

impl Section {
    /// Slot order used for prompts, selections and responses
    pub const ALL: [Section; 3] = [Section::Top, Section::Bottom, Section::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }
}

impl FromStr for Section {
    type Err = CoreError;

    /// Accepts the canonical names plus the plural aliases the upload form
    /// used to submit ("tops", "bottoms").
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "tops" => Ok(Self::Top),
            "bottom" | "bottoms" => Ok(Self::Bottom),
            "shoes" => Ok(Self::Shoes),
            _ => Err(CoreError::InvalidSection {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
