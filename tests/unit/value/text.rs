use super::*;

#[test]
fn formatted_from_string_is_one_section() {
    let f = Formatted::from_string("hello");
    assert_eq!(f.sections.len(), 1);
    assert_eq!(f.to_string(), "hello");
    assert!(!f.is_empty());
    assert!(Formatted::from_string("").is_empty());
}

#[test]
fn formatted_display_concatenates_sections() {
    let mut f = Formatted::from_string("a");
    f.sections.push(FormattedSection {
        text: "b".to_owned(),
        image: None,
        scale: Some(1.5),
        font_stack: None,
        text_color: Some(Color::BLACK),
    });
    assert_eq!(f.to_string(), "ab");
}

#[test]
fn resolved_image_requires_a_name() {
    assert!(ResolvedImage::build("").is_none());
    let img = ResolvedImage::build("marker-15").unwrap();
    assert_eq!(img.to_string(), "marker-15");
    assert!(!img.available);
}

#[test]
fn collator_serializes_camel_case_and_skips_missing_locale() {
    let loose = Collator {
        case_sensitive: false,
        diacritic_sensitive: true,
        locale: None,
    };
    assert_eq!(
        serde_json::to_value(&loose).unwrap(),
        serde_json::json!({ "caseSensitive": false, "diacriticSensitive": true })
    );

    let french = Collator {
        locale: Some("fr".to_owned()),
        ..loose
    };
    assert_eq!(
        serde_json::to_value(&french).unwrap()["locale"],
        serde_json::json!("fr")
    );
}
