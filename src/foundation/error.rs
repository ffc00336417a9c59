/// Convenience result type used across trailcanvas.
pub type TrailResult<T> = Result<T, TrailError>;

/// Top-level error taxonomy used by the simulation and rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrailError {
    /// Invalid user-provided data (geometry, sizes, colours).
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be provisioned or is unusable.
    #[error("surface error: {0}")]
    Surface(String),

    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// Pointer scripts that cannot be parsed or sampled.
    #[error("script error: {0}")]
    Script(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrailError {
    /// Build a [`TrailError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrailError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`TrailError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TrailError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
