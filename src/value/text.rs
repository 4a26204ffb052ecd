use std::fmt;

use serde::Serialize;

use crate::color::Color;

/// One run of [`Formatted`] text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSection {
    /// Text content (empty for image sections).
    pub text: String,
    /// Inline image, if this section is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ResolvedImage>,
    /// Font scale relative to the layer's text size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Comma-separated font stack override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_stack: Option<String>,
    /// Color override.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "color_as_string")]
    pub text_color: Option<Color>,
}

fn color_as_string<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match color {
        Some(c) => serializer.serialize_str(&c.to_premultiplied_string()),
        None => serializer.serialize_none(),
    }
}

/// Rich text made of sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Formatted {
    /// Sections in display order.
    pub sections: Vec<FormattedSection>,
}

impl Formatted {
    /// Single unstyled section holding `text`.
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            sections: vec![FormattedSection {
                text: text.into(),
                image: None,
                scale: None,
                font_stack: None,
                text_color: None,
            }],
        }
    }

    /// `true` when no section carries text or an image.
    pub fn is_empty(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.text.is_empty() && s.image.is_none())
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            f.write_str(&section.text)?;
        }
        Ok(())
    }
}

/// Named image, resolved against the sprite when rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    /// Image id.
    pub name: String,
    /// Whether the sprite currently holds this image.
    pub available: bool,
}

impl ResolvedImage {
    /// Reference to `name`, not yet known to be available. Empty names yield `None`.
    pub fn build(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            available: false,
        })
    }
}

impl fmt::Display for ResolvedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// String comparison options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collator {
    /// Distinguish upper and lower case.
    pub case_sensitive: bool,
    /// Distinguish accented characters from their base letters.
    pub diacritic_sensitive: bool,
    /// BCP 47 locale tag, if one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/value/text.rs"]
mod tests;
