use super::*;
use crate::color::Color;
use crate::value::{Evaluable, Formatted, ResolvedImage};

#[test]
fn scalars_classify_to_their_tag() {
    assert_eq!(classify(&Value::Null), Type::Null);
    assert_eq!(classify(&Value::Bool(false)), Type::Boolean);
    assert_eq!(classify(&Value::Number(f64::NAN)), Type::Number);
    assert_eq!(classify(&Value::from("s")), Type::String);
    assert_eq!(classify(&Value::Color(Color::WHITE)), Type::Color);
    assert_eq!(
        classify(&Value::Formatted(Formatted::from_string("a"))),
        Type::Formatted
    );
    assert_eq!(
        classify(&Value::ResolvedImage(ResolvedImage::build("img").unwrap())),
        Type::ResolvedImage
    );
    assert_eq!(
        classify(&Value::Evaluable(Evaluable::new(|_, _| None))),
        Type::Evaluable
    );
    assert_eq!(classify(&Value::Object(Default::default())), Type::Object);
}

#[test]
fn homogeneous_array_keeps_item_type_and_length() {
    let v = Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(classify(&v), Type::array(Type::Number, Some(2)));
}

#[test]
fn mixed_array_widens_to_value_but_keeps_length() {
    let v = Value::Array(vec![
        Value::Number(1.0),
        Value::from("two"),
        Value::Number(3.0),
    ]);
    assert_eq!(classify(&v), Type::array(Type::Value, Some(3)));
}

#[test]
fn empty_array_is_array_of_value() {
    assert_eq!(
        classify(&Value::Array(Vec::new())),
        Type::array(Type::Value, Some(0))
    );
}

#[test]
fn nested_arrays_compare_structurally() {
    let row = || Value::Array(vec![Value::Number(0.0), Value::Number(1.0)]);
    let v = Value::Array(vec![row(), row()]);
    assert_eq!(
        classify(&v),
        Type::array(Type::array(Type::Number, Some(2)), Some(2))
    );
}

#[test]
fn display_names() {
    assert_eq!(Type::ResolvedImage.to_string(), "resolvedImage");
    assert_eq!(Type::array(Type::Value, None).to_string(), "array");
    assert_eq!(Type::array(Type::Number, None).to_string(), "array<number>");
    assert_eq!(
        Type::array(Type::String, Some(2)).to_string(),
        "array<string, 2>"
    );
}
