//! Error types for doc2json
//!
//! Segmentation itself cannot fail. Everything here belongs to the edges: reading
//! input, loading configuration, serializing, and writing output. All of them are
//! fatal for the command, and each maps to its own exit status.

/// Result type for doc2json operations
pub type Result<T> = std::result::Result<T, Doc2JsonError>;

/// Failure of one of the serializers
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml encoding failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors that can occur while running a conversion
#[derive(Debug, thiserror::Error)]
pub enum Doc2JsonError {
    /// Input could not be read or was not valid UTF-8
    #[error("reading input: {0}")]
    Input(#[source] std::io::Error),

    /// Configuration could not be loaded
    #[error("loading configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    /// Output could not be written
    #[error("writing output: {0}")]
    Output(#[source] std::io::Error),

    /// The writer accepted fewer bytes than it was given
    #[error("short write: wrote {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

impl Doc2JsonError {
    /// Process exit status for this error. Status 2 is left to usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Doc2JsonError::Input(_) => 1,
            Doc2JsonError::Config(_) => 3,
            Doc2JsonError::Serialize(_) => 4,
            Doc2JsonError::Output(_) | Doc2JsonError::ShortWrite { .. } => 5,
        }
    }
}
