//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::rtf::RtfError;

impl From<RtfError> for Error {
    fn from(err: RtfError) -> Self {
        Error::InvalidFormat(err.to_string())
    }
}
