pub mod deck_dto;
pub mod decks_response;
pub mod outfit_selection_response;
pub mod outfit_status_response;
pub mod outfit_triple_request;
pub mod outfits;
pub mod saved_outfit_dto;
pub mod saved_outfit_list_response;
pub mod saved_outfits;
pub mod suggest_outfit_request;
pub mod toggle_outfit_response;
