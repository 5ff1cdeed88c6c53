/// Convenience result type used across Burstline.
pub type BurstlineResult<T> = Result<T, BurstlineError>;

/// Top-level error taxonomy.
///
/// Only configuration problems surface as errors. Sequencing itself degrades
/// gracefully: missing elements are skipped and out-of-range inputs are clamped.
#[derive(thiserror::Error, Debug)]
pub enum BurstlineError {
    /// Invalid user-provided sequence or binding data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown preset or unreadable configuration source.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BurstlineError {
    /// Build a [`BurstlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BurstlineError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BurstlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BurstlineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
