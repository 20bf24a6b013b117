use crate::{ApiResult, CurrentUser, ProfileResponse};

use axum::Json;

/// GET /api/v1/profile
pub async fn get_profile(CurrentUser(user): CurrentUser) -> ApiResult<Json<ProfileResponse>> {
    Ok(Json(ProfileResponse {
        profile: user.profile.into(),
    }))
}
