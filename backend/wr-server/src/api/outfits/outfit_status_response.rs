use serde::Serialize;

/// Whether an exact triple is saved
#[derive(Debug, Serialize)]
pub struct OutfitStatusResponse {
    pub saved: bool,
    pub outfit_id: Option<String>,
}
