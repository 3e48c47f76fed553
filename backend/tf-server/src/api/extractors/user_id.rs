//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Extracts the calling user's ID from the request
///
/// With a JWT validator configured, a valid `Authorization: Bearer` token is
/// required and its `sub` claim is the user. Without one, the `X-User-Id`
/// header is used, falling back to the configured default user.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(validator) = &state.jwt_validator {
                let header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                let token = tf_auth::bearer_token(header)?;
                let claims = validator.validate(token)?;
                let user_id = claims.user_id()?;

                log::debug!("Authenticated user {} via JWT", user_id);
                return Ok(UserId(user_id));
            }

            #[allow(clippy::collapsible_if)]
            if let Some(header_value) = headers.get("X-User-Id") {
                if let Ok(user_id_str) = header_value.to_str() {
                    if let Ok(uuid) = Uuid::parse_str(user_id_str) {
                        log::debug!("Using user ID from X-User-Id header: {}", uuid);
                        return Ok(UserId(uuid));
                    }
                    log::warn!("Invalid UUID in X-User-Id header: {}", user_id_str);
                }
            }

            log::debug!("Using default user ID: {}", state.default_user_id);
            Ok(UserId(state.default_user_id))
        }
    }
}
