use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let (scheme, token) = header.trim().split_once(' ').ok_or_else(|| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
