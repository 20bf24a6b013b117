mod error;
mod outfit_selection_response;
mod saved_outfit_dto;
