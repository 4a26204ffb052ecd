/// Result alias used across compilation and validation.
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors raised while turning a style function into a [`crate::CompiledFunction`].
///
/// Evaluation never produces one of these: a miss at evaluation time is an
/// ordinary `None` return.
#[derive(thiserror::Error, Debug)]
pub enum StyleError {
    /// The function cannot be compiled (unknown `type`, unknown `colorSpace`,
    /// unparsable default, no stops and no default).
    #[error("configuration error: {0}")]
    Config(String),

    /// Reported by a [`crate::SchemaValidator`] before compilation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed JSON at the boundary.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl StyleError {
    /// Build a [`StyleError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StyleError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StyleError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
