/// Convenience result type used across framereel.
pub type VisResult<T> = Result<T, VisError>;

/// Top-level error taxonomy used by rasterizer, exporter and driver APIs.
///
/// Drawing primitives never produce errors; everything here is a configuration, encoding or IO
/// failure that ends the current run.
#[derive(thiserror::Error, Debug)]
pub enum VisError {
    /// Invalid user-provided options (scale, dimensions, frame limits).
    #[error("validation error: {0}")]
    Validation(String),

    /// A bitmap font resource that could not be loaded or is malformed.
    #[error("font error: {0}")]
    Font(String),

    /// The image encoder rejected a frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VisError {
    /// Build a [`VisError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VisError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`VisError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`VisError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
