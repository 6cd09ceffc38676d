use thiserror::Error;

/// Main error type for lorascrub
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("file I/O error: {path}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl ScrubError {
    /// Create a file I/O error
    pub fn file_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type ScrubResult<T> = Result<T, ScrubError>;
