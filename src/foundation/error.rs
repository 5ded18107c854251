/// Convenience result type used across colorcloud.
pub type CloudResult<T> = Result<T, CloudError>;

/// Top-level error taxonomy used by renderer, assembler and sink APIs.
#[derive(thiserror::Error, Debug)]
pub enum CloudError {
    /// A precondition on caller-provided parameters was violated.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised while encoding frames into an output artifact.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing job files and metadata.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudError {
    /// Build a [`CloudError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CloudError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CloudError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
