use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn linear_factor_is_progress_over_span() {
    assert_close(interpolation_factor(5.0, 1.0, 0.0, 10.0), 0.5);
    assert_close(interpolation_factor(0.0, 1.0, 0.0, 10.0), 0.0);
    assert_close(interpolation_factor(10.0, 1.0, 0.0, 10.0), 1.0);
}

#[test]
fn exponential_factor_follows_the_curve() {
    // (2^5 - 1) / (2^10 - 1)
    assert_close(interpolation_factor(5.0, 2.0, 0.0, 10.0), 31.0 / 1023.0);
}

#[test]
fn zero_span_is_zero() {
    assert_eq!(interpolation_factor(3.0, 2.0, 3.0, 3.0), 0.0);
    assert_eq!(interpolation_factor(3.0, 1.0, 3.0, 3.0), 0.0);
}

#[test]
fn interpolation_type_delegates_to_factor() {
    assert_close(InterpolationType::Linear.factor(15.0, 10.0, 20.0), 0.5);
    assert_close(
        InterpolationType::Exponential { base: 2.0 }.factor(5.0, 0.0, 10.0),
        31.0 / 1023.0,
    );
    assert_close(
        InterpolationType::Exponential { base: 1.0 }.factor(2.5, 0.0, 10.0),
        0.25,
    );
}

#[test]
fn interpolation_type_serializes_with_name_tag() {
    assert_eq!(
        serde_json::to_value(InterpolationType::Linear).unwrap(),
        serde_json::json!({ "name": "linear" })
    );
    assert_eq!(
        serde_json::to_value(InterpolationType::Exponential { base: 1.5 }).unwrap(),
        serde_json::json!({ "name": "exponential", "base": 1.5 })
    );
}

#[test]
fn blend_is_picked_from_property_type() {
    assert_eq!(
        Blend::for_property(&PropertyType::Number, ColorSpace::Lab),
        Blend::Number
    );
    assert_eq!(
        Blend::for_property(&PropertyType::Color, ColorSpace::Hcl),
        Blend::Color(ColorSpace::Hcl)
    );
    assert_eq!(
        Blend::for_property(
            &PropertyType::Array {
                value: Box::new(PropertyType::Number),
                length: Some(2)
            },
            ColorSpace::Rgb
        ),
        Blend::NumberArray
    );
    assert_eq!(
        Blend::for_property(
            &PropertyType::Array {
                value: Box::new(PropertyType::String),
                length: None
            },
            ColorSpace::Rgb
        ),
        Blend::Hold
    );
    assert_eq!(
        Blend::for_property(&PropertyType::String, ColorSpace::Rgb),
        Blend::Hold
    );
}

#[test]
fn number_blend() {
    let v = Blend::Number
        .apply(&Value::Number(0.0), &Value::Number(100.0), 0.25)
        .unwrap();
    assert_eq!(v, Value::Number(25.0));
    assert_eq!(
        Blend::Number.apply(&Value::Number(0.0), &Value::from("x"), 0.5),
        None
    );
}

#[test]
fn rgb_color_blend_is_channelwise() {
    let black = Value::Color(Color::BLACK);
    let white = Value::Color(Color::WHITE);
    let Some(Value::Color(mid)) = Blend::Color(ColorSpace::Rgb).apply(&black, &white, 0.5) else {
        panic!("expected a color");
    };
    assert_close(mid.r, 0.5);
    assert_close(mid.g, 0.5);
    assert_close(mid.b, 0.5);
    assert_close(mid.a, 1.0);
}

#[test]
fn lab_color_blend_keeps_endpoints() {
    let red = Value::Color(Color::new(1.0, 0.0, 0.0, 1.0));
    let blue = Value::Color(Color::new(0.0, 0.0, 1.0, 1.0));
    let Some(Value::Color(start)) = Blend::Color(ColorSpace::Lab).apply(&red, &blue, 0.0) else {
        panic!("expected a color");
    };
    assert!((start.r - 1.0).abs() < 1e-3);
    assert!(start.b.abs() < 1e-3);
}

#[test]
fn number_array_blend_requires_equal_lengths() {
    let a = Value::Array(vec![Value::Number(0.0), Value::Number(10.0)]);
    let b = Value::Array(vec![Value::Number(10.0), Value::Number(20.0)]);
    assert_eq!(
        Blend::NumberArray.apply(&a, &b, 0.5),
        Some(Value::Array(vec![Value::Number(5.0), Value::Number(15.0)]))
    );

    let short = Value::Array(vec![Value::Number(1.0)]);
    assert_eq!(Blend::NumberArray.apply(&a, &short, 0.5), None);
}

#[test]
fn hold_returns_lower_endpoint() {
    assert_eq!(
        Blend::Hold.apply(&Value::from("a"), &Value::from("b"), 0.9),
        Some(Value::from("a"))
    );
}

#[test]
fn admits_checks_output_shape() {
    assert!(Blend::Number.admits(&Value::Number(1.0)));
    assert!(!Blend::Number.admits(&Value::from("1")));
    assert!(!Blend::Color(ColorSpace::Rgb).admits(&Value::from("not a color")));
    assert!(Blend::Color(ColorSpace::Rgb).admits(&Value::Color(Color::WHITE)));
    assert!(!Blend::NumberArray.admits(&Value::Array(vec![Value::from("a")])));
    assert!(Blend::Hold.admits(&Value::Null));
}

#[test]
fn admits_any_evaluable() {
    let deferred = Value::Evaluable(crate::value::Evaluable::new(|_, _| None));
    assert!(Blend::Number.admits(&deferred));
    assert!(Blend::Color(ColorSpace::Lab).admits(&deferred));
}

#[test]
fn interpolate_trait_for_plain_types() {
    assert_close(f64::interpolate(&2.0, &4.0, 0.5), 3.0);
    assert_eq!(
        Vec::<f64>::interpolate(&vec![0.0, 1.0], &vec![2.0, 3.0], 0.5),
        vec![1.0, 2.0]
    );
}
