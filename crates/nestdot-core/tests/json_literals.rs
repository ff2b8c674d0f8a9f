//! # JSON Literal Tests
//!
//! Exercises the public parsing boundary the way callers use it: nested
//! literals written as JSON text, converted to `NestedValue`, and written
//! back out.

use nestdot_core::{nested, NestdotError, NestedValue, Scalar, ValueError};

#[test]
fn original_demo_vectors_parse() {
    let a = NestedValue::from_json_str("[1, 2, 3, 4, 5]").unwrap();
    let b = NestedValue::from_json_str("[6, 7, 8, 9, 0]").unwrap();
    assert_eq!(a.leaf_count(), 5);
    assert_eq!(b.depth(), 1);

    let ragged = NestedValue::from_json_str("[1, 2, [3, 4, 5]]").unwrap();
    assert_eq!(ragged, nested!([1, 2, [3, 4, 5]]));
    assert_eq!(ragged.depth(), 2);
}

#[test]
fn three_level_nesting_parses() {
    let v = NestedValue::from_json_str("[[[1, 2], [3, 4]], [[5, 6], [7, 8]]]").unwrap();
    assert_eq!(v.depth(), 3);
    assert_eq!(v.leaf_count(), 8);
}

#[test]
fn large_unsigned_becomes_float() {
    let v = NestedValue::from_json_str("[18446744073709551615]").unwrap();
    let leaf = v.items()[0].as_scalar().unwrap();
    assert!(!leaf.is_int());
}

#[test]
fn negative_and_float_leaves() {
    let v = NestedValue::from_json_str("[-3, 0.25]").unwrap();
    assert_eq!(v.items()[0].as_scalar(), Some(Scalar::Int(-3)));
    assert_eq!(v.items()[1].as_scalar(), Some(Scalar::Float(0.25)));
}

#[test]
fn letters_from_zip_demo_are_rejected() {
    // The zip demo pairs numbers with letters; the reducer only accepts numbers.
    let err = NestedValue::from_json_str(r#"[["a", "b", "c"], ["d", "e", "f"]]"#).unwrap_err();
    match err {
        NestdotError::Value(ValueError::TypeMismatch { path, found }) => {
            assert_eq!(path, "/0/0");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bool_and_null_are_rejected() {
    for literal in ["[true]", "[1, [null]]"] {
        let err = NestedValue::from_json_str(literal).unwrap_err();
        assert!(matches!(err, NestdotError::Value(ValueError::TypeMismatch { .. })));
    }
}

#[test]
fn serialization_round_trips_literal() {
    let literal = "[1,2,[3,4,5],[],[[6.5]]]";
    let v = NestedValue::from_json_str(literal).unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), literal);
}
