//! Integration tests for the rectangle factory and the JSON bridge.

use proptest::prelude::*;
use quill_exercises::{Rectangle, from_json, from_json_with, rectangle, to_json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[test]
fn test_rectangle_area() {
    let r = rectangle(10.0, 20.0);
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_sized_rectangle() {
    assert!(rectangle(0.0, 5.0).area().abs() < f64::EPSILON);
    assert_eq!(Rectangle::default(), rectangle(0.0, 0.0));
}

#[test]
fn test_rectangle_to_json() {
    assert_eq!(
        to_json(&rectangle(10.0, 20.0)).unwrap(),
        r#"{"width":10.0,"height":20.0}"#
    );
}

#[test]
fn test_serialize_plain_values() {
    assert_eq!(to_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(to_json("text").unwrap(), r#""text""#);
    assert_eq!(to_json(&Option::<u8>::None).unwrap(), "null");
}

#[test]
fn test_rectangle_from_json_keeps_area() {
    let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
    assert_eq!(r, rectangle(10.0, 20.0));
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_json_propagates_parser_error() {
    let err = from_json::<Rectangle>(r#"{"width": 10,"#).unwrap_err();
    assert!(err.is_eof());

    let err = from_json_with((), "{oops}").unwrap_err();
    assert!(err.is_syntax());
}

// Prototype-backed deserialization

/// Behaviour with no data of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Circle;

impl Circle {
    fn kind(self) -> &'static str {
        "circle"
    }

    fn area(&self, fields: &Map<String, Value>) -> Option<f64> {
        let radius = fields.get("radius")?.as_f64()?;
        Some(std::f64::consts::PI * radius * radius)
    }
}

#[test]
fn test_prototype_supplies_behaviour() {
    let circle = from_json_with(Circle, r#"{"radius": 2}"#).unwrap();
    assert_eq!(circle.kind(), "circle");
    let area = circle.invoke(Circle::area).unwrap();
    assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn test_prototype_methods_see_updated_fields() {
    let mut circle = from_json_with(Circle, r#"{"radius": 1}"#).unwrap();
    let _ = circle.set_field("radius", Value::from(3));
    let area = circle.invoke(Circle::area).unwrap();
    assert!((area - 9.0 * std::f64::consts::PI).abs() < 1e-9);

    let missing = from_json_with(Circle, r#"{"diameter": 2}"#).unwrap();
    assert_eq!(missing.invoke(Circle::area), None);
    assert_eq!(missing.invoke(|circle, fields| (circle.kind(), fields.len())), ("circle", 1));
}

#[test]
fn test_own_fields_are_exactly_the_parsed_keys() {
    let record = from_json_with(Circle, r#"{"radius": 2, "label": "unit", "tags": [1, 2]}"#)
        .unwrap();
    let keys: Vec<&str> = record.fields().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["radius", "label", "tags"]);
    assert_eq!(record.field("label"), Some(&serde_json::json!("unit")));
    assert_eq!(record.field("missing"), None);
}

#[test]
fn test_fields_are_assigned_not_merged() {
    let nested = from_json_with(Circle, r#"{"inner": {"a": 1}}"#).unwrap();
    let (prototype, fields) = nested.into_parts();
    assert_eq!(prototype, Circle);
    assert_eq!(fields["inner"], serde_json::json!({"a": 1}));
}

#[test]
fn test_typed_view_of_fields() {
    let record = from_json_with(Circle, r#"{"width": 3, "height": 4}"#).unwrap();
    let r: Rectangle = record.typed().unwrap();
    assert!((r.area() - 12.0).abs() < f64::EPSILON);
}

#[test]
fn test_prototyped_serializes_own_fields_only() {
    let record = from_json_with(Circle, r#"{"b": 1, "a": 2}"#).unwrap();
    assert_eq!(to_json(&record).unwrap(), r#"{"b":1,"a":2}"#);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    title: String,
    pinned: bool,
    tags: Vec<String>,
}

#[test]
fn test_struct_round_trip() {
    let note = Note {
        title: "todo".to_string(),
        pinned: true,
        tags: vec!["a".to_string()],
    };
    let text = to_json(&note).unwrap();
    assert_eq!(from_json::<Note>(&text).unwrap(), note);

    let record = from_json_with((), &text).unwrap();
    assert_eq!(record.typed::<Note>().unwrap(), note);
    assert_eq!(record.fields().len(), 3);
}

proptest! {
    #[test]
    fn rectangle_area_is_product(w in 0.0f64..1e6, h in 0.0f64..1e6) {
        let r = rectangle(w, h);
        prop_assert_eq!(r.area(), w * h);
        prop_assert_eq!(r.width, w);
        prop_assert_eq!(r.height, h);
    }

    #[test]
    fn rectangle_fields_round_trip(w in 0u32..100_000, h in 0u32..100_000) {
        let original = rectangle(f64::from(w), f64::from(h));
        let text = to_json(&original).unwrap();

        let typed: Rectangle = from_json(&text).unwrap();
        prop_assert_eq!(typed, original);

        let record = from_json_with(Circle, &text).unwrap();
        prop_assert_eq!(record.field("width").and_then(Value::as_f64), Some(original.width));
        prop_assert_eq!(record.field("height").and_then(Value::as_f64), Some(original.height));
    }
}
