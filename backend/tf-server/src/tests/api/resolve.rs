use crate::{ApiError, parse_uuid};

use googletest::prelude::*;

#[test]
fn test_parse_uuid_accepts_surrounding_whitespace() {
    let parsed = parse_uuid(" 00000000-0000-0000-0000-000000000001 ", "task_id").unwrap();

    assert_that!(parsed, eq(uuid::Uuid::from_u128(1)));
}

#[test]
fn test_parse_uuid_names_field_on_failure() {
    let err = parse_uuid("nope", "source_column_id").unwrap_err();

    match err {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("source_column_id"));
            assert!(message.contains("source_column_id"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
