#![allow(dead_code)]

//! Test infrastructure for wr-server API tests

use wr_auth::JwtValidator;
use wr_config::ValidationConfig;
use wr_core::{ClothingItem, Section, SubscriptionPlan, UserProfile};
use wr_db::{ClothingItemRepository, UserRepository};
use wr_llm::{CompletionProvider, LlmError, OutfitAdvisor, Result as LlmErrorResult};
use wr_media::{ImagePipeline, LocalObjectStore, PassthroughRemover};
use wr_server::bootstrap::ensure_dev_user;
use wr_server::{AppState, Metrics, build_router};

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const DEV_USER: &str = "test-user";
pub const JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Completion provider returning a fixed reply, or failing with a 503
pub struct ScriptedProvider {
    reply: Mutex<Option<String>>,
    calls: Mutex<usize>,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(Some(reply.to_string())),
            calls: Mutex::new(0),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(None),
            calls: Mutex::new(0),
        })
    }

    pub fn set_reply(&self, reply: &str) {
        *self.reply.lock().unwrap() = Some(reply.to_string());
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, _system: &str, _prompt: &str) -> LlmErrorResult<String> {
        *self.calls.lock().unwrap() += 1;
        match self.reply.lock().unwrap().clone() {
            Some(reply) => Ok(reply),
            None => Err(LlmError::Status {
                status: 503,
                body: "service unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// A router over an in-memory database and a temporary image directory
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub provider: Arc<ScriptedProvider>,
    pub dev_user: UserProfile,
    pub storage: TempDir,
}

impl TestApp {
    /// Auth disabled, development user on the premium plan
    pub async fn new() -> Self {
        Self::build(None).await
    }

    /// Auth enabled with an HS256 secret
    pub async fn with_jwt() -> Self {
        Self::build(Some(Arc::new(JwtValidator::with_hs256(JWT_SECRET)))).await
    }

    async fn build(jwt_validator: Option<Arc<JwtValidator>>) -> Self {
        let pool = wr_db::connect_in_memory()
            .await
            .expect("Failed to create test database");
        let dev_user = ensure_dev_user(&pool, DEV_USER)
            .await
            .expect("Failed to create development user");

        let storage = TempDir::new().expect("Failed to create storage dir");
        let store = LocalObjectStore::new(storage.path(), "clothes", "http://localhost/images");
        let provider = ScriptedProvider::replying("{}");

        let state = AppState {
            pool,
            jwt_validator,
            dev_user_id: DEV_USER.to_string(),
            advisor: OutfitAdvisor::new(provider.clone()),
            images: ImagePipeline::new(Arc::new(PassthroughRemover), Arc::new(store)),
            metrics: Metrics::new(),
            prometheus: None,
            validation: ValidationConfig::default(),
        };
        let router = build_router(state.clone(), storage.path());

        Self {
            state,
            router,
            provider,
            dev_user,
            storage,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body)).await
    }

    pub async fn add_item(&self, section: Section, name: &str) -> ClothingItem {
        create_item(&self.state, self.dev_user.id, section, name).await
    }

    /// One item per section owned by the development user
    pub async fn add_basic_catalog(&self) -> (ClothingItem, ClothingItem, ClothingItem) {
        (
            self.add_item(Section::Top, "white tee").await,
            self.add_item(Section::Bottom, "blue jeans").await,
            self.add_item(Section::Shoes, "sneakers").await,
        )
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn create_item(
    state: &AppState,
    user_id: Uuid,
    section: Section,
    name: &str,
) -> ClothingItem {
    let item = ClothingItem::new(
        user_id,
        section,
        name.to_string(),
        "casual".to_string(),
        "black".to_string(),
        "minimal".to_string(),
        format!("http://localhost/images/clothes/{name}.png"),
    );
    ClothingItemRepository::new(state.pool.clone())
        .create(&item)
        .await
        .expect("Failed to create test item");
    item
}

pub async fn create_user(state: &AppState, auth_user_id: &str, plan: SubscriptionPlan) -> UserProfile {
    let mut profile = UserProfile::new(
        auth_user_id.to_string(),
        "Test".to_string(),
        "User".to_string(),
        format!("{auth_user_id}@test.local"),
    );
    profile.plan = plan;
    UserRepository::new(state.pool.clone())
        .create(&profile)
        .await
        .expect("Failed to create test user");
    profile
}
