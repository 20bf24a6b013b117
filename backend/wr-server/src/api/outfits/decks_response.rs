use crate::DeckDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DecksResponse {
    pub decks: Vec<DeckDto>,
}
