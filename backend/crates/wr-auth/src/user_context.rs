use wr_core::{SubscriptionPlan, UserProfile};

use uuid::Uuid;

/// Who is making the request. Built once per request and passed explicitly
/// into every catalog and outfit operation.
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: Uuid,
    pub auth_user_id: String,
    pub profile: UserProfile,
}

impl UserContext {
    pub fn from_profile(profile: UserProfile) -> Self {
        Self {
            user_id: profile.id,
            auth_user_id: profile.auth_user_id.clone(),
            profile,
        }
    }

    pub fn plan(&self) -> SubscriptionPlan {
        self.profile.plan
    }
}
