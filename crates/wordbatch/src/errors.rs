//! # Error Types

/// Errors from wordbatch operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbatchError {
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    Config(String),

    /// The corpus content cannot support the requested operation.
    #[error("invalid data: {0}")]
    Data(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Delimited-text reader error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Parse error (vocab files, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl WordbatchError {
    /// Build a [`WordbatchError::Config`] error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`WordbatchError::Data`] error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        Self::Data(msg.into())
    }
}

/// Result type for wordbatch operations.
pub type WBResult<T> = core::result::Result<T, WordbatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            WordbatchError::config("batch_size must be > 0").to_string(),
            "invalid config: batch_size must be > 0"
        );
        assert_eq!(
            WordbatchError::data("corpus is empty").to_string(),
            "invalid data: corpus is empty"
        );
    }

    #[test]
    fn test_io_from() {
        let err: WordbatchError = std::io::Error::other("boom").into();
        assert!(matches!(err, WordbatchError::Io(_)));
    }
}
