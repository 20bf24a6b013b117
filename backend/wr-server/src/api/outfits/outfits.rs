//! Outfit selection REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, DeckDto, DecksResponse, OutfitSelectionResponse,
    SuggestOutfitRequest,
};

use wr_core::{Section, SectionDeck, pick_random};
use wr_db::ClothingItemRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use error_location::ErrorLocation;

/// POST /api/v1/outfits/random
///
/// One random item per section. Empty sections come back unselected with a notice.
pub async fn random_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<OutfitSelectionResponse>> {
    let catalog = ClothingItemRepository::new(state.pool.clone())
        .list_by_user(user.user_id, None)
        .await?;

    let selection = pick_random(&catalog, &mut rand::rng());
    state.metrics.outfit_generated("random");

    Ok(Json(selection.into()))
}

/// POST /api/v1/outfits/suggest
///
/// Asks the completion endpoint to pick from the caller's catalog. Premium only.
pub async fn suggest_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<SuggestOutfitRequest>, JsonRejection>,
) -> ApiResult<Json<OutfitSelectionResponse>> {
    let Json(request) = payload?;

    if !user.plan().allows_ai_outfits() {
        return Err(ApiError::PlanRequired {
            message: "AI outfit suggestions require the premium plan".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let prompt = request.prompt.trim();
    let max_len = state.validation.max_prompt_length;
    if prompt.chars().count() > max_len {
        return Err(ApiError::validation(
            Some("prompt"),
            format!("prompt must be at most {max_len} characters"),
        ));
    }

    let catalog = ClothingItemRepository::new(state.pool.clone())
        .list_by_user(user.user_id, None)
        .await?;

    let selection = state
        .advisor
        .suggest(prompt, &catalog)
        .await
        .inspect_err(|e| {
            if e.is_upstream_failure() {
                state.metrics.llm_failure(e.kind());
            }
        })?;

    state.metrics.outfit_generated("ai");
    log::info!(
        "Suggested outfit for user {} ({} notices)",
        user.user_id,
        selection.notices.len()
    );

    Ok(Json(selection.into()))
}

/// GET /api/v1/outfits/decks
///
/// Every section shuffled, positioned on the empty slot.
pub async fn outfit_decks(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<DecksResponse>> {
    let catalog = ClothingItemRepository::new(state.pool.clone())
        .list_by_user(user.user_id, None)
        .await?;

    let mut rng = rand::rng();
    let decks = Section::ALL
        .iter()
        .map(|&section| DeckDto::from(SectionDeck::shuffled(section, &catalog, &mut rng)))
        .collect();

    Ok(Json(DecksResponse { decks }))
}
