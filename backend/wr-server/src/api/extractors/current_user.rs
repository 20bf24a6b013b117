//! Axum extractor that rebuilds the caller's `UserContext`

use crate::{ApiError, ApiResult, AppState};

use wr_auth::{AuthError, Claims, UserContext, bearer_token};
use wr_core::UserProfile;
use wr_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Header naming the auth user id when auth is disabled
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated caller.
///
/// With auth enabled the bearer JWT's `sub` claim names the user and the
/// local profile is mirrored from the claims: created on first sight, plan
/// kept in step with the `plan` claim. With auth disabled the `X-User-Id`
/// header names the user, falling back to the configured development user,
/// and the id must map to a stored profile.
pub struct CurrentUser(pub UserContext);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(validator) = &state.jwt_validator else {
                let auth_user_id = dev_user_id(parts, state);
                let profile = UserRepository::new(state.pool.clone())
                    .find_by_auth_user_id(&auth_user_id)
                    .await?
                    .ok_or_else(|| AuthError::UnknownUser {
                        auth_user_id: auth_user_id.clone(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                return Ok(CurrentUser(UserContext::from_profile(profile)));
            };

            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            let token = bearer_token(header)?;
            let claims = validator.validate(token)?;
            let profile = mirror_profile(state, &claims).await?;

            Ok(CurrentUser(UserContext::from_profile(profile)))
        }
    }
}

fn dev_user_id(parts: &Parts, state: &AppState) -> String {
    let header = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match header {
        Some(id) => {
            log::debug!("Using user id from {} header: {}", USER_ID_HEADER, id);
            id.to_string()
        }
        None => state.dev_user_id.clone(),
    }
}

async fn mirror_profile(state: &AppState, claims: &Claims) -> ApiResult<UserProfile> {
    let repo = UserRepository::new(state.pool.clone());

    let Some(mut profile) = repo.find_by_auth_user_id(&claims.sub).await? else {
        let profile = repo.ensure(&claims.to_profile()).await?;
        log::info!(
            "Provisioned profile {} for subject {}",
            profile.id,
            profile.auth_user_id
        );
        return Ok(profile);
    };

    if let Some(plan) = claims.plan()
        && plan != profile.plan
    {
        repo.update_plan(profile.id, plan).await?;
        log::info!(
            "Profile {} plan changed from {} to {}",
            profile.id,
            profile.plan.as_str(),
            plan.as_str()
        );
        profile.plan = plan;
    }

    Ok(profile)
}
