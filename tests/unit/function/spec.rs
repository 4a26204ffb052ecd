use super::*;
use serde_json::json;

#[test]
fn parses_full_function_object() {
    let spec = FunctionSpec::from_json(&json!({
        "type": "exponential",
        "property": "height",
        "base": 2,
        "default": 0,
        "colorSpace": "lab",
        "stops": [[0, 0], [10, 100]]
    }))
    .unwrap();

    assert_eq!(spec.kind.as_deref(), Some("exponential"));
    assert_eq!(spec.property.as_deref(), Some("height"));
    assert_eq!(spec.base, Some(2.0));
    assert_eq!(spec.default, Some(json!(0)));
    assert_eq!(spec.color_space.as_deref(), Some("lab"));
    assert_eq!(spec.stops().len(), 2);
    assert_eq!(spec.stops()[1], Stop(StopKey::Plain(json!(10)), json!(100)));
}

#[test]
fn missing_fields_are_none() {
    let spec = FunctionSpec::from_json(&json!({})).unwrap();
    assert_eq!(spec, FunctionSpec::default());
    assert!(spec.stops().is_empty());
    assert!(!spec.is_zoom_and_property());
}

#[test]
fn zoom_and_value_keys_parse_as_zoom_stops() {
    let spec = FunctionSpec::from_json(&json!({
        "property": "p",
        "stops": [[{"zoom": 0, "value": 0}, 0], [{"zoom": 10, "value": "a"}, 5]]
    }))
    .unwrap();

    assert!(spec.is_zoom_and_property());
    assert_eq!(
        spec.stops()[1].0,
        StopKey::Zoom {
            zoom: 10.0,
            value: json!("a")
        }
    );
}

#[test]
fn object_key_without_zoom_is_plain() {
    let spec = FunctionSpec::from_json(&json!({ "stops": [[{"value": 1}, 0]] })).unwrap();
    assert!(matches!(spec.stops()[0].0, StopKey::Plain(_)));
    assert!(!spec.is_zoom_and_property());
}

#[test]
fn malformed_stop_is_a_serde_error() {
    let err = FunctionSpec::from_json(&json!({ "stops": [[0]] })).unwrap_err();
    assert!(matches!(err, StyleError::Serde(_)));
    let err = FunctionSpec::from_json(&json!({ "base": "two" })).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn serializes_back_with_camel_case_names() {
    let spec = FunctionSpec {
        kind: Some("interval".to_owned()),
        color_space: Some("hcl".to_owned()),
        ..FunctionSpec::default()
    };
    assert_eq!(
        serde_json::to_value(&spec).unwrap(),
        json!({ "type": "interval", "colorSpace": "hcl" })
    );
}

#[test]
fn function_type_names_round_trip() {
    for ty in [
        FunctionType::Exponential,
        FunctionType::Interval,
        FunctionType::Categorical,
        FunctionType::Identity,
    ] {
        assert_eq!(FunctionType::from_name(ty.name()), Some(ty));
    }
    assert_eq!(FunctionType::from_name("linear"), None);
    assert_eq!(FunctionType::from_name("Exponential"), None);
}

#[test]
fn only_objects_are_functions() {
    assert!(is_function(&json!({ "stops": [] })));
    assert!(is_function(&json!({})));
    assert!(!is_function(&json!(null)));
    assert!(!is_function(&json!([1, 2])));
    assert!(!is_function(&json!("red")));
    assert!(!is_function(&json!(3)));
}
