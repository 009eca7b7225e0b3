//! Scalar validator behavior shared across kinds.

use pretty_assertions::assert_eq;
use rstest::rstest;
use schemata_validator::prelude::*;

#[rstest]
#[case::int(int().shared(), Value::from(1_isize))]
#[case::int8(int8().shared(), Value::from(1_i8))]
#[case::int16(int16().shared(), Value::from(1_i16))]
#[case::int32(int32().shared(), Value::from(1_i32))]
#[case::int64(int64().shared(), Value::from(1_i64))]
#[case::uint(uint().shared(), Value::from(1_usize))]
#[case::uint8(uint8().shared(), Value::from(1_u8))]
#[case::uint16(uint16().shared(), Value::from(1_u16))]
#[case::uint32(uint32().shared(), Value::from(1_u32))]
#[case::uint64(uint64().shared(), Value::from(1_u64))]
#[case::float32(float32().shared(), Value::from(1.0_f32))]
#[case::float64(float64().shared(), Value::from(1.0_f64))]
#[case::string(string().shared(), Value::from("x"))]
#[case::boolean(boolean().shared(), Value::from(true))]
fn each_kind_accepts_only_its_exact_type(
    #[case] validator: std::sync::Arc<dyn Validate>,
    #[case] matching: Value,
) {
    assert!(validator.validate(&matching, None).is_ok());

    let others = [
        Value::from(1_isize),
        Value::from(1_i8),
        Value::from(1_i16),
        Value::from(1_i32),
        Value::from(1_i64),
        Value::from(1_usize),
        Value::from(1_u8),
        Value::from(1_u16),
        Value::from(1_u32),
        Value::from(1_u64),
        Value::from(1.0_f32),
        Value::from(1.0_f64),
        Value::from("x"),
        Value::from(true),
        Value::List(vec![]),
        Value::Record(Record::new("R")),
    ];
    for other in others.iter().filter(|other| **other != matching) {
        let errors = validator.validate(other, Some("v")).unwrap_err();
        assert_eq!(errors.len(), 1, "{other:?} should be a single type mismatch");
        assert!(errors.first().starts_with("<v> failed validation for <"));
    }
}

#[test]
fn type_mismatch_never_mixes_with_rule_failures() {
    let v = int32().gt(100).lt(0).non_zero().positive();
    assert_eq!(v.check(0_i32).unwrap_err().len(), 4);
    assert_eq!(v.check(0_i64).unwrap_err().len(), 1);
}

#[rstest]
#[case::int(int32().positive().shared(), Value::from(Some(5_i32)))]
#[case::float(float64().shared(), Value::from(Box::new(1.5_f64)))]
#[case::string(string().min(1).shared(), Value::from(Some("ada")))]
#[case::boolean(boolean().is_true().shared(), Value::from(Some(true)))]
fn required_scalar_rejects_references(
    #[case] validator: std::sync::Arc<dyn Validate>,
    #[case] reference: Value,
) {
    let errors = validator.validate(&reference, Some("v")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.first().starts_with("<v> failed validation for <"));
}

#[rstest]
#[case::int(int8().positive().optional().shared())]
#[case::float(float64().gt(1.0).optional().shared())]
#[case::string(string().min(100).email().optional().shared())]
#[case::boolean(boolean().is_true().optional().shared())]
#[case::structure(structure().field("x", int32()).optional().shared())]
fn optional_accepts_nil_regardless_of_rules(#[case] validator: std::sync::Arc<dyn Validate>) {
    assert!(validator.validate(&Value::Nil, None).is_ok());
    assert!(validator.validate(&Value::Ref(None), Some("x")).is_ok());
    assert!(
        validator
            .validate(&Value::Ref(Some(Box::new(Value::Ref(None)))), None)
            .is_ok()
    );
}

#[test]
fn with_message_before_any_rule_is_ignored() {
    let v = int32().with_message("unused").positive();
    assert_eq!(
        v.check(-1_i32).unwrap_err().first(),
        "failed <i32> validation for <Positive>"
    );
}

#[test]
fn message_priority_explicit_then_tagged_then_untagged() {
    let explicit = uint16().lt(10).with_message("too big");
    let generated = uint16().lt(10);

    assert_eq!(explicit.check_tagged(10_u16, "n").unwrap_err().first(), "too big");
    assert_eq!(
        generated.check_tagged(10_u16, "n").unwrap_err().first(),
        "<n> failed <u16> validation for <Lt(10)>"
    );
    assert_eq!(
        generated.check(10_u16).unwrap_err().first(),
        "failed <u16> validation for <Lt(10)>"
    );
}

#[test]
fn validators_are_reusable_across_calls() {
    let v = int64().range(1, 10).tag("n");
    assert!(v.check(5_i64).is_ok());
    assert!(v.check(50_i64).is_err());
    assert!(v.check(5_i64).is_ok());
    assert_eq!(
        v.check_tagged(50_i64, "other").unwrap_err().first(),
        "<other> failed <i64> validation for <Range(1, 10)>"
    );
    assert_eq!(
        v.check(50_i64).unwrap_err().first(),
        "<n> failed <i64> validation for <Range(1, 10)>"
    );
}
