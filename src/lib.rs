//! rtfpad - the document core of a minimal rich-text editor
//!
//! This library converts between a styled document model (paragraphs of
//! bold, italic and underline runs) and a small subset of RTF, and provides
//! the editing session that a front-end drives.
//!
//! # Features
//!
//! - **RTF writer**: fixed single-font header, minimal toggle commands,
//!   escaping of `\`, `{` and `}`
//! - **RTF reader**: plain-text recovery in the local 8-bit encoding
//! - **Session**: new / open / save / save-as with an unsaved-changes guard,
//!   behind a [`session::Prompter`] trait
//!
//! # Example - Writing and reading back
//!
//! ```
//! use rtfpad::rtf::{self, DecodeOptions, Document, Paragraph, Style};
//!
//! let doc = Document::from_paragraphs([
//!     Paragraph::new().with("Hi", Style::BOLD),
//!     Paragraph::plain("Bye"),
//! ]);
//! let bytes = rtf::encode(&doc);
//! assert!(bytes.ends_with(b"\\b Hi\\par\nBye}"));
//!
//! // Formatting is not read back.
//! let back = rtf::decode_with(&bytes, &DecodeOptions::with_encoding(encoding_rs::UTF_8))?;
//! assert_eq!(back.text(), "\\b Hi\nBye");
//! # Ok::<(), rtfpad::rtf::RtfError>(())
//! ```

/// Error types and text encoding helpers shared across the crate.
pub mod common;

/// RTF reader, writer and document model.
pub mod rtf;

/// Editing session orchestration.
pub mod session;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use rtf::{DecodeOptions, Document, Paragraph, Run, Style, decode, encode};
pub use session::{Prompter, SaveChoice, Session};
