//! Unified error types for rtfpad.
//!
//! Format-level problems are reported by [`crate::rtf::RtfError`] and folded
//! into [`Error::InvalidFormat`] once they cross into file handling.
use thiserror::Error;

/// Main error type for rtfpad operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while opening, reading or writing a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not an RTF stream this reader accepts
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Text encoding label not known to `encoding_rs`
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),
}

/// Result type for rtfpad operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownEncoding("klingon".to_string());
        assert_eq!(err.to_string(), "Unknown text encoding: klingon");

        let err = Error::InvalidFormat("missing signature".to_string());
        assert_eq!(err.to_string(), "Invalid format: missing signature");
    }
}
