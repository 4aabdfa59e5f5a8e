//! Error types for Filedrop.

use thiserror::Error;

/// Common error type for Filedrop.
#[derive(Error, Debug)]
pub enum FiledropError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Validation error for configuration values or client input.
    #[error("validation error: {0}")]
    Validation(String),

    /// An uploaded file exceeded the per-file size limit (in bytes).
    #[error("file exceeds the maximum size of {0} bytes")]
    TooLarge(u64),
}

/// Result type alias for Filedrop operations.
pub type Result<T> = std::result::Result<T, FiledropError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = FiledropError::Config("missing section".to_string());
        assert_eq!(err.to_string(), "configuration error: missing section");
    }

    #[test]
    fn test_validation_error_display() {
        let err = FiledropError::Validation("max_files must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: max_files must be positive"
        );
    }

    #[test]
    fn test_too_large_error_display() {
        let err = FiledropError::TooLarge(1024);
        assert_eq!(err.to_string(), "file exceeds the maximum size of 1024 bytes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FiledropError = io_err.into();
        assert!(matches!(err, FiledropError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(FiledropError::Config("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
