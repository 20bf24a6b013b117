use crate::{
    AppState, create_clothing_item, delete_clothing_item, delete_saved_outfit, get_profile,
    health, list_clothes, list_saved_outfits, outfit_decks, random_outfit, saved_outfit_status,
    suggest_outfit, toggle_saved_outfit, update_clothing_item,
};

use std::path::Path;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Base64 inflates uploads by a third; leave room for the JSON around it
fn body_limit(max_image_bytes: usize) -> usize {
    max_image_bytes / 3 * 4 + 64 * 1024
}

/// Build the application router with all endpoints.
///
/// `storage_root` is served read-only under `/images`.
pub fn build_router(state: AppState, storage_root: &Path) -> Router {
    let api = Router::new()
        .route("/profile", get(get_profile))
        .route("/clothes", get(list_clothes).post(create_clothing_item))
        .route(
            "/clothes/{id}",
            put(update_clothing_item).delete(delete_clothing_item),
        )
        .route("/outfits/random", post(random_outfit))
        .route("/outfits/suggest", post(suggest_outfit))
        .route("/outfits/decks", get(outfit_decks))
        .route("/outfits/saved", get(list_saved_outfits))
        .route("/outfits/saved/status", get(saved_outfit_status))
        .route("/outfits/saved/toggle", post(toggle_saved_outfit))
        .route("/outfits/saved/{id}", delete(delete_saved_outfit))
        .layer(DefaultBodyLimit::max(body_limit(
            state.validation.max_image_bytes,
        )));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .nest("/api/v1", api)
        .nest_service("/images", ServeDir::new(storage_root))
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
