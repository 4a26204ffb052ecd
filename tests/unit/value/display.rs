use super::*;
use crate::color::Color;
use crate::value::{Collator, Formatted, ResolvedImage};
use serde_json::json;

#[test]
fn primitives_render_as_plain_text() {
    assert_eq!(stringify(&Value::Null), "");
    assert_eq!(stringify(&Value::Bool(true)), "true");
    assert_eq!(stringify(&Value::Number(3.0)), "3");
    assert_eq!(stringify(&Value::Number(0.125)), "0.125");
    assert_eq!(stringify(&Value::from("abc")), "abc");
}

#[test]
fn colors_render_premultiplied() {
    let c = Color::from_straight(0.0, 0.0, 1.0, 0.5);
    assert_eq!(stringify(&Value::Color(c)), "rgba(0,0,128,0.5)");
}

#[test]
fn text_kinds_render_their_own_text() {
    assert_eq!(
        stringify(&Value::Formatted(Formatted::from_string("label"))),
        "label"
    );
    assert_eq!(
        stringify(&Value::ResolvedImage(ResolvedImage::build("icon").unwrap())),
        "icon"
    );
}

#[test]
fn containers_render_as_json() {
    assert_eq!(
        stringify(&Value::from(json!([1, "a", null]))),
        r#"[1,"a",null]"#
    );
    assert_eq!(
        stringify(&Value::from(json!({"b": 1, "a": true}))),
        r#"{"b":1,"a":true}"#
    );
    let collator = Value::Collator(Collator {
        case_sensitive: true,
        diacritic_sensitive: false,
        locale: None,
    });
    assert_eq!(
        stringify(&collator),
        r#"{"caseSensitive":true,"diacriticSensitive":false}"#
    );
}

#[test]
fn display_delegates_to_stringify() {
    assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
}
