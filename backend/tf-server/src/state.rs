use tf_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Identity for requests without X-User-Id while auth is disabled
    pub default_user_id: Uuid,
}
