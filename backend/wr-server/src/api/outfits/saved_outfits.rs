//! Saved outfit REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, DeleteResponse, OutfitStatusResponse,
    OutfitTripleRequest, SavedOutfitDto, SavedOutfitListResponse, ToggleOutfitResponse,
};

use wr_core::{OutfitTriple, Section};
use wr_db::{ClothingItemRepository, SavedOutfitRepository};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use uuid::Uuid;

/// GET /api/v1/outfits/saved
///
/// Newest first, each with its items resolved.
pub async fn list_saved_outfits(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<SavedOutfitListResponse>> {
    let outfits = SavedOutfitRepository::new(state.pool.clone())
        .list_by_user(user.user_id)
        .await?;
    let catalog = ClothingItemRepository::new(state.pool.clone())
        .list_by_user(user.user_id, None)
        .await?;

    Ok(Json(SavedOutfitListResponse {
        outfits: outfits
            .into_iter()
            .map(|outfit| SavedOutfitDto::resolve(outfit, &catalog))
            .collect(),
    }))
}

/// GET /api/v1/outfits/saved/status?top=&bottom=&shoes=
pub async fn saved_outfit_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<OutfitTripleRequest>, QueryRejection>,
) -> ApiResult<Json<OutfitStatusResponse>> {
    let Query(request) = query?;
    let triple = request.triple()?;

    let existing = SavedOutfitRepository::new(state.pool.clone())
        .find_matching(user.user_id, &triple)
        .await?;

    Ok(Json(OutfitStatusResponse {
        saved: existing.is_some(),
        outfit_id: existing.map(|outfit| outfit.id.to_string()),
    }))
}

/// POST /api/v1/outfits/saved/toggle
///
/// Saves the triple, or removes it when it is already saved. Saving requires
/// every item to belong to the caller and sit in its slot's section. Removing
/// an existing saved outfit does not, so outfits whose items were deleted can
/// still be unsaved.
pub async fn toggle_saved_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<OutfitTripleRequest>, JsonRejection>,
) -> ApiResult<Json<ToggleOutfitResponse>> {
    let Json(request) = payload?;
    let triple = request.triple()?;

    let repo = SavedOutfitRepository::new(state.pool.clone());
    if repo.find_matching(user.user_id, &triple).await?.is_none() {
        check_ownership(&state, user.user_id, &triple).await?;
    }

    let outcome = repo.toggle(user.user_id, &triple).await?;

    let action = if outcome.is_saved() { "saved" } else { "removed" };
    state.metrics.outfit_toggled(action);
    log::info!(
        "User {} {} outfit {}",
        user.user_id,
        action,
        outcome.outfit_id()
    );

    Ok(Json(ToggleOutfitResponse::from(&outcome)))
}

/// DELETE /api/v1/outfits/saved/{id}
pub async fn delete_saved_outfit(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = path?;
    let outfit_id = Uuid::parse_str(&id)?;

    let deleted = SavedOutfitRepository::new(state.pool.clone())
        .delete(user.user_id, outfit_id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Saved outfit {} not found", id)));
    }

    Ok(Json(DeleteResponse {
        deleted_id: outfit_id.to_string(),
    }))
}

async fn check_ownership(state: &AppState, user_id: Uuid, triple: &OutfitTriple) -> ApiResult<()> {
    let repo = ClothingItemRepository::new(state.pool.clone());

    for (section, id) in [
        (Section::Top, triple.top),
        (Section::Bottom, triple.bottom),
        (Section::Shoes, triple.shoes),
    ] {
        let owned = repo.find_owned(user_id, id).await?;
        match owned {
            Some(item) if item.section == section => {}
            Some(item) => {
                return Err(ApiError::validation(
                    Some(section.as_str()),
                    format!("Item {} is a {}, not a {}", id, item.section, section),
                ));
            }
            None => {
                return Err(ApiError::validation(
                    Some(section.as_str()),
                    format!("Item {} is not in your {} items", id, section),
                ));
            }
        }
    }

    Ok(())
}
