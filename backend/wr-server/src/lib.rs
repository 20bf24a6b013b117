pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    clothes::{
        clothes::{create_clothing_item, delete_clothing_item, list_clothes, update_clothing_item},
        clothing_item_dto::ClothingItemDto,
        clothing_item_list_response::ClothingItemListResponse,
        clothing_item_response::ClothingItemResponse,
        create_clothing_item_request::CreateClothingItemRequest,
        list_clothes_query::ListClothesQuery,
        update_clothing_item_request::UpdateClothingItemRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::{CurrentUser, USER_ID_HEADER},
    outfits::{
        deck_dto::DeckDto,
        decks_response::DecksResponse,
        outfit_selection_response::{NoticeDto, OutfitSelectionResponse},
        outfit_status_response::OutfitStatusResponse,
        outfit_triple_request::OutfitTripleRequest,
        outfits::{outfit_decks, random_outfit, suggest_outfit},
        saved_outfit_dto::SavedOutfitDto,
        saved_outfit_list_response::SavedOutfitListResponse,
        saved_outfits::{
            delete_saved_outfit, list_saved_outfits, saved_outfit_status, toggle_saved_outfit,
        },
        suggest_outfit_request::SuggestOutfitRequest,
        toggle_outfit_response::ToggleOutfitResponse,
    },
    profile::{profile::get_profile, profile_dto::ProfileDto, profile_response::ProfileResponse},
};
pub use app_state::AppState;
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;
