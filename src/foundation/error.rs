/// Convenience result type used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error taxonomy for the fallible surfaces: construction, validation and config IO.
///
/// The per-frame computations (progress, letter transforms) never fail; they clamp.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid parameters (window fractions, letter duration, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration source could not be read.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
