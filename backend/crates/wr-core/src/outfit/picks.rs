use crate::{CoreError, Result as CoreResult, Section};

use serde_json::Value;

/// Identifiers returned by the completion endpoint, one optional per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitPicks {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub shoes: Option<String>,
}

impl OutfitPicks {
    pub fn get(&self, section: Section) -> Option<&str> {
        match section {
            Section::Top => self.top.as_deref(),
            Section::Bottom => self.bottom.as_deref(),
            Section::Shoes => self.shoes.as_deref(),
        }
    }
}

/// Strictly decodes a `{top, bottom, shoes}` completion payload.
///
/// Absent keys, `null` and empty strings become `None`. Any other non-string
/// value, non-JSON text or a non-object document is a `MalformedResponse`.
/// Unknown keys are ignored.
pub fn decode_outfit_picks(text: &str) -> CoreResult<OutfitPicks> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| CoreError::malformed(format!("response is not valid JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(CoreError::malformed("response is not a JSON object"));
    };

    let slot = |section: Section| -> CoreResult<Option<String>> {
        match map.get(section.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(id)) => {
                let id = id.trim();
                Ok((!id.is_empty()).then(|| id.to_string()))
            }
            Some(other) => Err(CoreError::malformed(format!(
                "'{section}' must be a string or null, got {other}"
            ))),
        }
    };

    Ok(OutfitPicks {
        top: slot(Section::Top)?,
        bottom: slot(Section::Bottom)?,
        shoes: slot(Section::Shoes)?,
    })
}
