use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SuggestOutfitRequest {
    /// Freeform description of the occasion or look
    pub prompt: String,
}
