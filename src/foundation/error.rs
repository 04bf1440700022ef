/// Convenience result type used across vitality.
pub type VitalityResult<T> = Result<T, VitalityError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Navigation input is never an error: out-of-range jumps, unknown slide names and empty returns
/// are ignored. Errors are reserved for invalid decks and renderer failures.
#[derive(thiserror::Error, Debug)]
pub enum VitalityError {
    /// Invalid user-provided deck data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A renderer rejected a draw call (unknown primitive, bad property key, stale handle).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VitalityError {
    /// Build a [`VitalityError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VitalityError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`VitalityError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
