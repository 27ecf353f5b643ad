use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application
#[derive(Debug, Error)]
pub enum Error {
    /// Reading input or writing an artifact failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A descriptor snapshot could not be decoded.
    #[error("invalid snapshot {}: {message}", file.display())]
    Snapshot { file: PathBuf, message: String },

    /// An assembled document could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The model graph nests deeper than the configured ceiling.
    #[error("model graph below `{type_name}` exceeds the depth limit of {limit}")]
    ModelDepthExceeded { type_name: String, limit: usize },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON: {}", err))
    }
}

impl Error {
    /// Wraps a decode failure with the file it came from.
    pub fn snapshot(file: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Snapshot {
            file: file.into(),
            message: message.to_string(),
        }
    }
}
