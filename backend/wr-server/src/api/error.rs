//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a matching status code. Lower-layer errors are converted here so
//! handlers can use `?` without leaking internals.

use wr_auth::AuthError;
use wr_core::CoreError;
use wr_db::DbError;
use wr_llm::LlmError;
use wr_media::MediaError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Shown for every ingestion failure after validation
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process image. Please try again.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403, AI suggestions on a free plan
    #[error("Plan required: {message} {location}")]
    PlanRequired {
        message: String,
        location: ErrorLocation,
    },

    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 422
    #[error("Image processing failed: {message} {location}")]
    ProcessingFailed {
        message: String,
        location: ErrorLocation,
    },

    /// 502, the completion endpoint could not be reached or refused
    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    /// 502, the completion endpoint answered with something undecodable
    #[error("Malformed upstream response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: Option<&str>, message: S) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn processing_failed() -> Self {
        ApiError::ProcessingFailed {
            message: PROCESSING_FAILED_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::PlanRequired { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ProcessingFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Upstream { .. } | Self::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::PlanRequired { .. } => "PLAN_REQUIRED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ProcessingFailed { .. } => "PROCESSING_FAILED",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match self.status() {
            s if s.is_server_error() => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let status = self.status();
        let code = self.code().to_string();

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::Unauthorized { message, .. }
            | ApiError::PlanRequired { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::ProcessingFailed { message, .. }
            | ApiError::Upstream { message, .. }
            | ApiError::MalformedResponse { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code,
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::InvalidSection { value, .. } => ApiError::Validation {
                message: format!("Invalid section '{value}', expected top, bottom or shoes"),
                field: Some("section".to_string()),
                location,
            },
            CoreError::Uuid { source, .. } => ApiError::Validation {
                message: format!("Invalid UUID format: {source}"),
                field: None,
                location,
            },
            CoreError::MalformedResponse { message, .. } => ApiError::MalformedResponse {
                message: format!("The outfit suggestion could not be read: {message}"),
                location,
            },
            CoreError::InvalidPlan { value, .. } => {
                log::error!("Stored profile has unknown plan '{}'", value);
                ApiError::Internal {
                    message: "Profile data is invalid".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::debug!("Rejected credentials ({}): {}", e.error_code(), e);
        ApiError::Unauthorized {
            message: e.public_message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<LlmError> for ApiError {
    #[track_caller]
    fn from(e: LlmError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if !matches!(e, LlmError::Outfit { .. }) {
            log::error!("Completion failed ({}): {}", e.kind(), e);
        }

        match e {
            LlmError::Outfit { source, .. } => ApiError::from(source),
            LlmError::MalformedResponse { message, .. } => ApiError::MalformedResponse {
                message: format!("The outfit suggestion could not be read: {message}"),
                location,
            },
            LlmError::Transport { .. } | LlmError::Status { .. } | LlmError::MissingApiKey { .. } => {
                ApiError::Upstream {
                    message: "The outfit suggestion service is unavailable".to_string(),
                    location,
                }
            }
        }
    }
}

/// Every media failure collapses to one user-visible message
impl From<MediaError> for ApiError {
    #[track_caller]
    fn from(e: MediaError) -> Self {
        log::error!("Image processing failed: {}", e);
        ApiError::processing_failed()
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(e: PathRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
