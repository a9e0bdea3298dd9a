#![allow(clippy::unwrap_used, clippy::expect_used)]

use deepeq_core::errors::{DeepEqError, ExError, ExErrorKind};
use deepeq_core::{Comparer, CompareOptions, CyclePolicy};
use serde_json::json;

#[test]
fn test_toml_options_drive_comparison() {
    // GIVEN options loaded from TOML that ignore `id`
    let options = CompareOptions::from_toml_str(
        r#"
        ignore_fields = ["id", "updated_at"]
        max_depth = 32
        "#,
    )
    .expect("valid options");

    // WHEN two documents differ only in ignored fields
    let a = json!({"id": 1, "updated_at": "t1", "body": {"id": 5, "text": "x"}});
    let b = json!({"id": 2, "updated_at": "t2", "body": {"id": 6, "text": "x"}});

    // THEN they compare equal
    assert!(Comparer::new(options).compare(&a, &b));
}

#[test]
fn test_yaml_options_round_out_defaults() {
    let options = CompareOptions::from_yaml_str("cycle_policy: reject\n").unwrap();
    assert!(options.ignore_fields.is_empty());
    assert_eq!(options.max_depth, None);
    assert_eq!(options.cycle_policy, CyclePolicy::Reject);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = CompareOptions::from_toml_str("ignore_fields = [").unwrap_err();
    assert!(matches!(err, DeepEqError::Parse { ref format, .. } if format == "toml"));

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::Parse);
    assert_eq!(ex.code(), "ERR_PARSE");
}

#[test]
fn test_unknown_cycle_policy_is_rejected() {
    let err = CompareOptions::from_yaml_str("cycle_policy: explode\n").unwrap_err();
    assert!(matches!(err, DeepEqError::Parse { .. }));
}

#[test]
fn test_invalid_values_map_to_invalid_options() {
    let err = CompareOptions::from_yaml_str("max_depth: 0\n").unwrap_err();
    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::InvalidOptions);
    assert_eq!(ex.code(), "ERR_INVALID_OPTIONS");
}

#[test]
fn test_options_round_trip_through_toml() {
    let options = CompareOptions::new()
        .ignore_fields(["b", "a"])
        .with_max_depth(12)
        .with_cycle_policy(CyclePolicy::Reject);

    let text = toml::to_string(&options).unwrap();
    assert_eq!(CompareOptions::from_toml_str(&text).unwrap(), options);
}
