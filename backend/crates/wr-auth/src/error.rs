use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    /// Token is valid but no wardrobe profile exists for its subject
    #[error("No profile for user '{auth_user_id}' {location}")]
    UnknownUser {
        auth_user_id: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable code for logs and client-facing messages
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::UnknownUser { .. } => "UNKNOWN_USER",
        }
    }

    /// Short description without the source location
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } | Self::JwtDecode { .. } => "Invalid token",
            Self::TokenExpired { .. } => "Token expired",
            Self::MissingHeader { .. } => "Missing authorization header",
            Self::InvalidScheme { .. } => "Authorization must use the Bearer scheme",
            Self::InvalidClaim { .. } => "Token claims are invalid",
            Self::UnknownUser { .. } => "No profile exists for this account",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
