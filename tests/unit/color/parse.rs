use super::*;

fn approx(c: Color, expected: [f64; 4]) {
    let got = [c.r, c.g, c.b, c.a];
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() < 1e-3, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn parses_hex_forms() {
    approx(parse_css_color("#fff").unwrap(), [1.0, 1.0, 1.0, 1.0]);
    approx(parse_css_color("#FF0000").unwrap(), [1.0, 0.0, 0.0, 1.0]);
    approx(parse_css_color("#00ff0080").unwrap(), [0.0, 0.502, 0.0, 0.502]);
    approx(parse_css_color("#0000").unwrap(), [0.0, 0.0, 0.0, 0.0]);
    assert!(parse_css_color("#12345").is_none());
    assert!(parse_css_color("#zzzzzz").is_none());
}

#[test]
fn parses_rgb_functions() {
    approx(parse_css_color("rgb(255, 0, 0)").unwrap(), [1.0, 0.0, 0.0, 1.0]);
    approx(
        parse_css_color("rgba(0, 255, 0, 0.5)").unwrap(),
        [0.0, 0.5, 0.0, 0.5],
    );
    approx(
        parse_css_color("rgb(100%, 50%, 0%)").unwrap(),
        [1.0, 0.5, 0.0, 1.0],
    );
}

#[test]
fn rejects_out_of_range_components() {
    assert!(parse_css_color("rgb(300, 0, 0)").is_none());
    assert!(parse_css_color("rgba(0, 0, 0, 2)").is_none());
    assert!(parse_css_color("hsl(400, 50%, 50%)").is_none());
}

#[test]
fn parses_hsl_functions() {
    approx(parse_css_color("hsl(0, 100%, 50%)").unwrap(), [1.0, 0.0, 0.0, 1.0]);
    approx(
        parse_css_color("hsla(120, 100%, 50%, 0.5)").unwrap(),
        [0.0, 0.5, 0.0, 0.5],
    );
}

#[test]
fn parses_named_colors() {
    approx(parse_css_color("red").unwrap(), [1.0, 0.0, 0.0, 1.0]);
    approx(parse_css_color(" Navy ").unwrap(), [0.0, 0.0, 0.502, 1.0]);
    approx(parse_css_color("transparent").unwrap(), [0.0, 0.0, 0.0, 0.0]);
    assert!(parse_css_color("not-a-color").is_none());
}

#[test]
fn validation_messages_name_the_offending_component() {
    assert!(validate_rgba(0.0, 0.0, 0.0, None).is_none());
    let msg = validate_rgba(256.0, 0.0, 0.0, None).unwrap();
    assert!(msg.contains("'r', 'g', and 'b'"));
    assert!(msg.contains("[256, 0, 0]"));
    let msg = validate_rgba(0.0, 0.0, 0.0, Some(1.5)).unwrap();
    assert!(msg.contains("'a' must be between 0 and 1"));

    assert!(validate_hsla(360.0, 100.0, 0.0, Some(1.0)).is_none());
    assert!(validate_hsla(-1.0, 0.0, 0.0, None).unwrap().contains("'h'"));
    assert!(validate_hsla(0.0, 101.0, 0.0, None).unwrap().contains("'s', and 'l'"));
}
