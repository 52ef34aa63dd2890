/// Convenience result type used across the crate.
pub type MaskResult<T> = Result<T, MaskError>;

/// Top-level error taxonomy.
///
/// Only construction and IO edges produce errors; per-frame updates are infallible.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Silhouette path data that cannot be parsed or sampled.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while reading or decoding configuration files.
    #[error("config error: {0}")]
    Config(String),

    /// Errors while rasterizing or writing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    /// Build a [`MaskError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaskError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`MaskError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MaskError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
