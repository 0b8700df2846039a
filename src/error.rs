//! Error types for cimeta operations.
//!
//! Detection itself has no failure mode: every snapshot, including an empty
//! one, produces a well-defined result. [`CimetaError`] covers the output
//! path of the CLI, where encoding and IO can fail.

use thiserror::Error;

/// Core error type for cimeta operations.
#[derive(Debug, Error)]
pub enum CimetaError {
    /// Failed to encode detection output.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cimeta operations.
pub type Result<T> = std::result::Result<T, CimetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CimetaError = io_err.into();
        assert!(matches!(err, CimetaError::Io(_)));
    }

    #[test]
    fn encode_error_converts_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CimetaError = json_err.into();
        assert!(err.to_string().contains("Failed to encode output"));
    }

    #[test]
    fn anyhow_error_passes_through() {
        let err: CimetaError = anyhow::anyhow!("wrapped").into();
        assert_eq!(err.to_string(), "wrapped");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CimetaError::Other(anyhow::anyhow!("test")))
        }
        assert!(returns_error().is_err());
    }
}
