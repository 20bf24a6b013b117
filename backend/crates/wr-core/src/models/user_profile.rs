use crate::SubscriptionPlan;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account profile owned by the identity service. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: Uuid,
    /// Subject claim issued by the identity provider
    pub auth_user_id: String,
    pub name: String,
    pub last_name: String,
    pub plan: SubscriptionPlan,
    pub email: String,
}

impl UserProfile {
    pub fn new(auth_user_id: String, name: String, last_name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            auth_user_id,
            name,
            last_name,
            plan: SubscriptionPlan::Free,
            email,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }
}
