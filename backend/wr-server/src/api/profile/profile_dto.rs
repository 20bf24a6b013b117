use wr_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub id: String,
    pub auth_user_id: String,
    pub name: String,
    pub last_name: String,
    pub display_name: String,
    pub email: String,
    pub plan: String,
    /// Whether `/outfits/suggest` is available
    pub ai_outfits: bool,
}

impl From<UserProfile> for ProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name(),
            plan: profile.plan.as_str().to_string(),
            ai_outfits: profile.plan.allows_ai_outfits(),
            auth_user_id: profile.auth_user_id,
            name: profile.name,
            last_name: profile.last_name,
            email: profile.email,
        }
    }
}
