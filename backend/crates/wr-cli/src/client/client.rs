use crate::{CliClientResult, ClientError};

use std::panic::Location;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the wr-server REST API
pub struct Client {
    pub base_url: String,
    pub user_id: Option<String>,
    pub token: Option<String>,
    client: ReqwestClient,
}

/// Metadata for a new clothing item
#[derive(Debug, Clone, Copy)]
pub struct NewItem<'a> {
    pub section: &'a str,
    pub name: &'a str,
    pub item_type: &'a str,
    pub color: &'a str,
    pub style: &'a str,
}

/// Metadata edits; `None` leaves a field as it is
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ItemEdits<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a str>,
}

#[derive(Serialize)]
struct Triple<'a> {
    top: &'a str,
    bottom: &'a str,
    shoes: &'a str,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `user_id` - Sent as `X-User-Id` when the server runs without auth
    /// * `token` - Sent as a bearer token when the server validates JWTs
    pub fn new(base_url: &str, user_id: Option<&str>, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.map(String::from),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.authorize(self.client.request(method, &url))
    }

    /// GET with query parameters encoded into the URL
    #[track_caller]
    fn get_with_query(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> CliClientResult<reqwest::RequestBuilder> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(self.authorize(self.client.request(Method::GET, url)))
    }

    fn authorize(&self, mut req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref user_id) = self.user_id {
            req = req.header("X-User-Id", user_id);
        }
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&text)?);
        }

        // Rejections from outside the API (body limits, proxies) are not JSON
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let (code, message) = match body.get("error") {
            Some(error) => (
                error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string(),
            ),
            None => (status.as_u16().to_string(), text.trim().to_string()),
        };

        Err(ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn get_profile(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/profile");
        self.execute(req).await
    }

    // =========================================================================
    // Clothes
    // =========================================================================

    /// List the catalog, optionally one section only
    pub async fn list_clothes(&self, section: Option<&str>) -> CliClientResult<Value> {
        let params: Vec<(&str, &str)> = section.map(|s| ("section", s)).into_iter().collect();
        let req = self.get_with_query("/api/v1/clothes", &params)?;
        self.execute(req).await
    }

    /// Upload an image file with its metadata
    pub async fn add_clothing_item(
        &self,
        item: NewItem<'_>,
        image_path: &Path,
    ) -> CliClientResult<Value> {
        let bytes = tokio::fs::read(image_path)
            .await
            .map_err(|source| ClientError::Image {
                path: image_path.display().to_string(),
                location: ErrorLocation::from(Location::caller()),
                source,
            })?;

        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        #[derive(Serialize)]
        struct CreateRequest<'a> {
            section: &'a str,
            name: &'a str,
            #[serde(rename = "type")]
            item_type: &'a str,
            color: &'a str,
            style: &'a str,
            file_name: &'a str,
            content_type: &'a str,
            image_base64: String,
        }

        let body = CreateRequest {
            section: item.section,
            name: item.name,
            item_type: item.item_type,
            color: item.color,
            style: item.style,
            file_name: &file_name,
            content_type: content_type_for(image_path),
            image_base64: BASE64.encode(&bytes),
        };
        let req = self.request(Method::POST, "/api/v1/clothes").json(&body);
        self.execute(req).await
    }

    pub async fn edit_clothing_item(
        &self,
        id: &str,
        edits: ItemEdits<'_>,
    ) -> CliClientResult<Value> {
        let req = self
            .request(Method::PUT, &format!("/api/v1/clothes/{}", id))
            .json(&edits);
        self.execute(req).await
    }

    pub async fn delete_clothing_item(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/clothes/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Outfits
    // =========================================================================

    pub async fn random_outfit(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/v1/outfits/random");
        self.execute(req).await
    }

    pub async fn suggest_outfit(&self, prompt: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SuggestRequest<'a> {
            prompt: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/v1/outfits/suggest")
            .json(&SuggestRequest { prompt });
        self.execute(req).await
    }

    pub async fn outfit_decks(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/outfits/decks");
        self.execute(req).await
    }

    pub async fn list_saved_outfits(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/api/v1/outfits/saved");
        self.execute(req).await
    }

    pub async fn saved_outfit_status(
        &self,
        top: &str,
        bottom: &str,
        shoes: &str,
    ) -> CliClientResult<Value> {
        let req = self.get_with_query(
            "/api/v1/outfits/saved/status",
            &[("top", top), ("bottom", bottom), ("shoes", shoes)],
        )?;
        self.execute(req).await
    }

    /// Save the outfit, or remove it if it is already saved
    pub async fn toggle_saved_outfit(
        &self,
        top: &str,
        bottom: &str,
        shoes: &str,
    ) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/api/v1/outfits/saved/toggle")
            .json(&Triple { top, bottom, shoes });
        self.execute(req).await
    }

    pub async fn delete_saved_outfit(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/api/v1/outfits/saved/{}", id));
        self.execute(req).await
    }
}

/// Content type guessed from the file extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        _ => "image/png",
    }
}
