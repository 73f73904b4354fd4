/// Convenience result type used across the crate.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Error taxonomy for the fallible (textual) entry points.
///
/// Numeric attribute writes never fail: out-of-range values are clamped or
/// normalized instead.
#[derive(thiserror::Error, Debug)]
pub enum PlacementError {
    /// Invalid user-provided data, such as an unknown attribute name.
    #[error("validation error: {0}")]
    Validation(String),

    /// A textual angle could not be resolved to radians.
    #[error("angle error: {0}")]
    Angle(String),

    /// Errors when serializing or deserializing attribute snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacementError {
    /// Build a [`PlacementError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlacementError::Angle`] value.
    pub fn angle(msg: impl Into<String>) -> Self {
        Self::Angle(msg.into())
    }

    /// Build a [`PlacementError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PlacementError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
