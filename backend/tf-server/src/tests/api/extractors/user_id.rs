use crate::{ApiError, AppState, UserId};

use tf_auth::{Claims, JwtValidator};

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

const SECRET: &[u8] = b"extractor-test-secret-at-least-32-bytes";

fn create_test_state(jwt_validator: Option<Arc<JwtValidator>>) -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_lazy(":memory:")
        .expect("Failed to create lazy pool");

    AppState {
        pool,
        jwt_validator,
        default_user_id: Uuid::from_u128(1),
    }
}

fn token_for(sub: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + 3600,
        iat: now,
        roles: vec![],
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<UserId, ApiError> {
    let (mut parts, _body) = request.into_parts();
    UserId::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state(None);
    let request = Request::builder()
        .header("X-User-Id", "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(
        result.unwrap().0.to_string(),
        "12345678-1234-1234-1234-123456789abc"
    );
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_missing() {
    let state = create_test_state(None);
    let request = Request::builder().body(Body::empty()).unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap().0, state.default_user_id);
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid_uuid() {
    let state = create_test_state(None);
    let request = Request::builder()
        .header("X-User-Id", "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap().0, state.default_user_id);
}

#[tokio::test]
async fn test_extractor_uses_jwt_subject_when_auth_enabled() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET))));
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for(&user_id.to_string())))
        .header("X-User-Id", Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert_eq!(result.unwrap().0, user_id);
}

#[tokio::test]
async fn test_extractor_rejects_missing_token_when_auth_enabled() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET))));
    let request = Request::builder()
        .header("X-User-Id", Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_uuid_subject() {
    let state = create_test_state(Some(Arc::new(JwtValidator::with_hs256(SECRET))));
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for("alice")))
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
