/// Convenience result type used across blendover.
pub type BlendoverResult<T> = Result<T, BlendoverError>;

/// Top-level error taxonomy used by the compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlendoverError {
    /// Invalid user-provided parameters or buffer geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating or sampling animated parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// A frame source failed to deliver a requested buffer. Never recovered
    /// locally; the frame's composite is aborted with no partial output.
    #[error("frame fetch error: {0}")]
    Fetch(String),

    /// Errors from the rasterizer or surface setup.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendoverError {
    /// Build a [`BlendoverError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendoverError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`BlendoverError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`BlendoverError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
