//! Catalog REST API handlers
//!
//! Ingestion, listing, metadata edits and deletion of clothing items.

use crate::{
    ApiError, ApiResult, AppState, ClothingItemDto, ClothingItemListResponse,
    ClothingItemResponse, CreateClothingItemRequest, CurrentUser, DeleteResponse,
    ListClothesQuery, UpdateClothingItemRequest,
};

use wr_core::{ClothingItem, ClothingItemChanges, Section, validate_text_field};
use wr_db::ClothingItemRepository;
use wr_media::ImageUpload;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use uuid::Uuid;

const DEFAULT_UPLOAD_CONTENT_TYPE: &str = "image/png";

/// GET /api/v1/clothes?section=
pub async fn list_clothes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    query: Result<Query<ListClothesQuery>, QueryRejection>,
) -> ApiResult<Json<ClothingItemListResponse>> {
    let Query(query) = query?;

    let section = match query.section.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<Section>()?),
    };

    let items = ClothingItemRepository::new(state.pool.clone())
        .list_by_user(user.user_id, section)
        .await?;

    Ok(Json(ClothingItemListResponse {
        items: items.into_iter().map(ClothingItemDto::from).collect(),
    }))
}

/// POST /api/v1/clothes
///
/// Validates metadata, removes the background, uploads the result and
/// records the item. Anything failing after validation is reported with a
/// single generic message.
pub async fn create_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<CreateClothingItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ClothingItemResponse>)> {
    let Json(request) = payload?;

    let section: Section = request.section.parse()?;
    let max_len = state.validation.max_field_length;
    validate_text_field("name", &request.name, max_len)?;
    validate_text_field("type", &request.item_type, max_len)?;
    validate_text_field("color", &request.color, max_len)?;
    validate_text_field("style", &request.style, max_len)?;

    if request.file_name.trim().is_empty() {
        return Err(ApiError::validation(
            Some("file_name"),
            "file_name cannot be empty",
        ));
    }

    let image = BASE64
        .decode(request.image_base64.trim())
        .map_err(|e| ApiError::validation(Some("image"), format!("Image is not valid base64: {e}")))?;
    if image.is_empty() {
        return Err(ApiError::validation(Some("image"), "Image cannot be empty"));
    }
    if image.len() > state.validation.max_image_bytes {
        return Err(ApiError::validation(
            Some("image"),
            format!(
                "Image must be at most {} bytes",
                state.validation.max_image_bytes
            ),
        ));
    }

    let upload = ImageUpload {
        file_name: request.file_name.trim().to_string(),
        content_type: request
            .content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_CONTENT_TYPE.to_string()),
        bytes: Bytes::from(image),
    };

    let image_url = state
        .images
        .process(user.user_id, upload)
        .await
        .inspect_err(|_| state.metrics.ingestion_failed())?;

    let item = ClothingItem::new(
        user.user_id,
        section,
        request.name.trim().to_string(),
        request.item_type.trim().to_string(),
        request.color.trim().to_string(),
        request.style.trim().to_string(),
        image_url,
    );

    if let Err(e) = ClothingItemRepository::new(state.pool.clone())
        .create(&item)
        .await
    {
        log::error!("Failed to record ingested item {}: {}", item.id, e);
        state.metrics.ingestion_failed();
        return Err(ApiError::processing_failed());
    }

    state.metrics.item_ingested(section.as_str());
    log::info!(
        "User {} added {} '{}' ({})",
        user.user_id,
        section,
        item.name,
        item.id
    );

    Ok((
        StatusCode::CREATED,
        Json(ClothingItemResponse { item: item.into() }),
    ))
}

/// PUT /api/v1/clothes/{id}
///
/// Edits name, type, color and style. Section and image are fixed.
pub async fn update_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateClothingItemRequest>, JsonRejection>,
) -> ApiResult<Json<ClothingItemResponse>> {
    let Path(id) = path?;
    let Json(request) = payload?;
    let item_id = Uuid::parse_str(&id)?;

    let changes = ClothingItemChanges::from(request);
    changes.validate(state.validation.max_field_length)?;

    let repo = ClothingItemRepository::new(state.pool.clone());
    let mut item = repo
        .find_owned(user.user_id, item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Clothing item {} not found", id)))?;

    changes.apply(&mut item);

    if !repo.update(&item).await? {
        return Err(ApiError::not_found(format!("Clothing item {} not found", id)));
    }

    log::info!("User {} updated clothing item {}", user.user_id, item.id);

    Ok(Json(ClothingItemResponse { item: item.into() }))
}

/// DELETE /api/v1/clothes/{id}
///
/// Saved outfits referencing the item are kept.
pub async fn delete_clothing_item(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = path?;
    let item_id = Uuid::parse_str(&id)?;

    let deleted = ClothingItemRepository::new(state.pool.clone())
        .delete(user.user_id, item_id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Clothing item {} not found", id)));
    }

    log::info!("User {} deleted clothing item {}", user.user_id, item_id);

    Ok(Json(DeleteResponse {
        deleted_id: item_id.to_string(),
    }))
}
