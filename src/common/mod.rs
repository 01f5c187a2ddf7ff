//! Common types and utilities shared by the RTF codec and the session layer.

// Submodule declarations
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
