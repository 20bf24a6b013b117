use crate::{AuthError, Result as AuthErrorResult};

use wr_core::{SubscriptionPlan, UserProfile};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const MAX_SUBJECT_LEN: usize = 128;

/// Claims issued by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity-provider user id, matched against `users.auth_user_id`
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Subscription plan as the identity service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LEN {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
    /// The plan claim, when present and recognised
    pub fn plan(&self) -> Option<SubscriptionPlan> {
        self.plan
            .as_deref()
            .and_then(|value| SubscriptionPlan::from_str(value).ok())
    }

    /// Local profile mirrored from these claims. Missing names and email
    /// are stored empty and a missing plan means free.
    pub fn to_profile(&self) -> UserProfile {
        let mut profile = UserProfile::new(
            self.sub.clone(),
            self.given_name.clone().unwrap_or_default(),
            self.family_name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
        );
        profile.plan = self.plan().unwrap_or_default();
        profile
    }
}
