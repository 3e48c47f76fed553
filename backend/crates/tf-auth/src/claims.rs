use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload. `sub` carries the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Checks the claims that signature verification does not cover.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id().map(drop)
    }

    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        let invalid = |message: String| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        match self.sub.trim() {
            "" => Err(invalid("subject is empty".to_string())),
            sub => Uuid::parse_str(sub).map_err(|e| invalid(format!("not a user id: {}", e))),
        }
    }
}
