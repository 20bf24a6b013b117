use crate::Metrics;

use wr_auth::JwtValidator;
use wr_config::ValidationConfig;
use wr_llm::OutfitAdvisor;
use wr_media::ImagePipeline;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state for every handler. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when auth is disabled (development mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Auth user id used when auth is disabled and no `X-User-Id` is sent
    pub dev_user_id: String,
    pub advisor: OutfitAdvisor,
    pub images: ImagePipeline,
    pub metrics: Metrics,
    pub prometheus: Option<PrometheusHandle>,
    pub validation: ValidationConfig,
}
