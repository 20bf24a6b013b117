use serde::Deserialize;

/// New catalog entry. The image travels base64-encoded.
#[derive(Debug, Deserialize)]
pub struct CreateClothingItemRequest {
    /// top | bottom | shoes (plurals accepted)
    pub section: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub color: String,
    pub style: String,

    /// Original file name, used in the storage path
    pub file_name: String,

    /// Defaults to image/png
    #[serde(default)]
    pub content_type: Option<String>,

    /// Standard base64, padding required
    pub image_base64: String,
}
