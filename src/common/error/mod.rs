//! Unified error types for rtfpad.
//!
//! This module provides a single error type covering both the RTF format
//! errors and the file-system errors raised while loading or saving.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
