use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Completed.as_str(), "completed");
    assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        ProjectStatus::from_str("on-hold").unwrap(),
        ProjectStatus::OnHold
    );
    assert_eq!(
        ProjectStatus::from_str("completed").unwrap(),
        ProjectStatus::Completed
    );
    assert!(ProjectStatus::from_str("archived").is_err());
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn test_project_status_serializes_kebab_case() {
    let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
    assert_eq!(json, "\"on-hold\"");
}
