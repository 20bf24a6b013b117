use wr_db::ToggleOutcome;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ToggleOutfitResponse {
    /// State after the toggle
    pub saved: bool,
    /// The new outfit's id when saved, the removed one's otherwise
    pub outfit_id: String,
}

impl From<&ToggleOutcome> for ToggleOutfitResponse {
    fn from(outcome: &ToggleOutcome) -> Self {
        Self {
            saved: outcome.is_saved(),
            outfit_id: outcome.outfit_id().to_string(),
        }
    }
}
