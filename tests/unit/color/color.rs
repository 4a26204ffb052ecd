use super::*;

#[test]
fn straight_channels_are_premultiplied() {
    let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
    assert_eq!(c, Color::new(0.5, 0.25, 0.0, 0.5));

    let [r, g, b, a] = c.to_straight();
    assert!((r - 1.0).abs() < 1e-12);
    assert!((g - 0.5).abs() < 1e-12);
    assert_eq!(b, 0.0);
    assert_eq!(a, 0.5);
}

#[test]
fn transparent_unpremultiplies_to_zero() {
    assert_eq!(Color::TRANSPARENT.to_straight(), [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn premultiplied_string_uses_byte_channels() {
    assert_eq!(Color::WHITE.to_premultiplied_string(), "rgba(255,255,255,1)");
    let half_red = Color::from_straight(1.0, 0.0, 0.0, 0.5);
    assert_eq!(half_red.to_string(), "rgba(128,0,0,0.5)");
}
