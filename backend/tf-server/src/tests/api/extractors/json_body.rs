use crate::{ApiError, JsonBody, MoveTaskRequest};

use axum::{body::Body, extract::FromRequest, http::Request};

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_fractional_index_is_validation_error() {
    let request = json_request(
        r#"{"task_id":"a","source_column_id":"b","destination_column_id":"c","destination_index":1.5}"#,
    );

    let result = JsonBody::<MoveTaskRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("PUT")
        .body(Body::from("{}"))
        .unwrap();

    let result = JsonBody::<MoveTaskRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_well_formed_body_is_extracted() {
    let request = json_request(
        r#"{"task_id":"a","source_column_id":"b","destination_column_id":"c","destination_index":2}"#,
    );

    let JsonBody(req) = JsonBody::<MoveTaskRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(req.destination_index, 2);
    assert_eq!(req.task_id, "a");
}
