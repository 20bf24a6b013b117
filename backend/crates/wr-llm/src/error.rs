use wr_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Completion request failed: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Completion endpoint returned {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Completion response is malformed: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("No API key configured for the completion endpoint {location}")]
    MissingApiKey { location: ErrorLocation },

    /// Prompt construction or picks decoding failed
    #[error("Outfit error: {source} {location}")]
    Outfit {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl LlmError {
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        LlmError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Status { .. } => "status",
            Self::MalformedResponse { .. } => "malformed",
            Self::MissingApiKey { .. } => "missing_key",
            Self::Outfit {
                source: CoreError::MalformedResponse { .. },
                ..
            } => "malformed",
            Self::Outfit { .. } => "validation",
        }
    }

    /// True when the completion round trip itself failed, as opposed to the
    /// caller's input being rejected before any request was made
    pub fn is_upstream_failure(&self) -> bool {
        self.kind() != "validation"
    }
}

impl From<reqwest::Error> for LlmError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        LlmError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<CoreError> for LlmError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        LlmError::Outfit {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LlmError>;
