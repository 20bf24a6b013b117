use crate::{CompletionProvider, LlmError, Result as LlmErrorResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// Bodies longer than this are cut before being logged or returned in errors
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct ChatCompletionSettings {
    pub api_base: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

/// Client for OpenAI-compatible `POST {api_base}/chat/completions` endpoints
pub struct ChatCompletionClient {
    settings: ChatCompletionSettings,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionClient {
    #[track_caller]
    pub fn new(settings: ChatCompletionSettings) -> LlmErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            settings: ChatCompletionSettings {
                api_base: settings.api_base.trim_end_matches('/').to_string(),
                ..settings
            },
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.api_base)
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionClient {
    async fn complete(&self, system: &str, prompt: &str) -> LlmErrorResult<String> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let body = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.settings.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        log::debug!(
            "Requesting completion from {} (model {})",
            self.endpoint(),
            self.settings.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: truncate(&text),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::malformed(format!("response is not JSON: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| LlmError::malformed("missing choices[0].message.content"))
    }

    fn name(&self) -> &str {
        "chat-completions"
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_BODY_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{cut}...")
}
