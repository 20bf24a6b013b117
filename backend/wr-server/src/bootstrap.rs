use crate::error::Result as ServerErrorResult;
use crate::{AppState, Metrics};

use wr_auth::JwtValidator;
use wr_config::Config;
use wr_core::{SubscriptionPlan, UserProfile};
use wr_db::UserRepository;
use wr_llm::{ChatCompletionClient, ChatCompletionSettings, OutfitAdvisor};
use wr_media::{
    BackgroundRemover, HttpBackgroundRemover, ImagePipeline, LocalObjectStore, PassthroughRemover,
};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Wires every collaborator from a validated config.
pub async fn build_state(
    config: &Config,
    pool: SqlitePool,
    prometheus: Option<PrometheusHandle>,
) -> ServerErrorResult<AppState> {
    let config_dir = Config::config_dir()?;

    let jwt_validator = build_jwt_validator(config, &config_dir)?;
    if jwt_validator.is_none() {
        warn!("Authentication DISABLED - running in development mode");
        ensure_dev_user(&pool, &config.auth.dev_user_id).await?;
    }

    let llm = ChatCompletionClient::new(ChatCompletionSettings {
        api_base: config.llm.api_base.clone(),
        api_key: config.llm.api_key.clone(),
        model: config.llm.model.clone(),
        temperature: config.llm.temperature,
        timeout: Duration::from_secs(config.llm.timeout_secs),
    })?;
    if !config.llm.has_api_key() {
        warn!("No LLM API key configured; outfit suggestions will fail");
    }

    let remover: Arc<dyn BackgroundRemover> =
        match (config.segmentation.enabled, config.segmentation.endpoint.as_deref()) {
            (true, Some(endpoint)) => {
                info!("Background removal via {}", endpoint);
                Arc::new(HttpBackgroundRemover::new(
                    endpoint,
                    Duration::from_secs(config.segmentation.timeout_secs),
                )?)
            }
            _ => Arc::new(PassthroughRemover),
        };

    let store = LocalObjectStore::new(
        config.storage_root()?,
        &config.storage.bucket,
        &config.storage.public_base_url,
    );

    Ok(AppState {
        pool,
        jwt_validator,
        dev_user_id: config.auth.dev_user_id.clone(),
        advisor: OutfitAdvisor::new(Arc::new(llm)),
        images: ImagePipeline::new(remover, Arc::new(store)),
        metrics: Metrics::new(),
        prometheus,
        validation: config.validation.clone(),
    })
}

fn build_jwt_validator(
    config: &Config,
    config_dir: &Path,
) -> ServerErrorResult<Option<Arc<JwtValidator>>> {
    if !config.auth.enabled {
        return Ok(None);
    }

    let validator = if let Some(secret) = &config.auth.jwt_secret {
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(public_key) = config.auth.load_public_key(config_dir)? {
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(wr_config::ConfigError::auth(
            "auth.enabled requires jwt_secret or jwt_public_key_path",
        )
        .into());
    };

    info!("JWT: {} authentication enabled", validator.algorithm());
    Ok(Some(Arc::new(validator)))
}

/// Creates the development profile if it does not exist yet.
///
/// The development user gets the premium plan so every flow is reachable locally.
pub async fn ensure_dev_user(pool: &SqlitePool, dev_user_id: &str) -> ServerErrorResult<UserProfile> {
    let mut profile = UserProfile::new(
        dev_user_id.to_string(),
        "Dev".to_string(),
        "User".to_string(),
        format!("{dev_user_id}@localhost"),
    );
    profile.plan = SubscriptionPlan::Premium;

    let stored = UserRepository::new(pool.clone()).ensure(&profile).await?;
    info!(
        "Development user ready: {} ({}, plan {})",
        stored.auth_user_id,
        stored.id,
        stored.plan.as_str()
    );

    Ok(stored)
}
