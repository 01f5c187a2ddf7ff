//! Error types for RTF decoding.

use std::fmt;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtfError {
    /// Input does not start with the `{\rtf` signature
    InvalidSignature,
    /// No `\colortbl` header group, rejected under the strict policy
    MissingColorTable,
}

impl fmt::Display for RtfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtfError::InvalidSignature => write!(f, "Invalid RTF file format: missing {{\\rtf signature"),
            RtfError::MissingColorTable => write!(f, "Malformed RTF document: no \\colortbl group"),
        }
    }
}

impl std::error::Error for RtfError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            RtfError::InvalidSignature.to_string(),
            "Invalid RTF file format: missing {\\rtf signature"
        );
        assert_eq!(
            RtfError::MissingColorTable.to_string(),
            "Malformed RTF document: no \\colortbl group"
        );
    }
}
