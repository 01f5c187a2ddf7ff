//! Minimal RTF reader and writer.
//!
//! This module converts between a [`Document`] (paragraphs of bold, italic
//! and underline runs) and a small subset of RTF.
//!
//! # Architecture
//!
//! - **Writer**: emits a fixed header and per-character toggle commands,
//!   driven by the state machine in [`state`]
//! - **Reader**: strips the header up to the color table and splits the
//!   content on `\par`, recovering plain text only
//! - **Detection**: the `{\rtf` signature check
//!
//! The two directions are deliberately asymmetric: formatting is written but
//! not read back.
//!
//! # Example
//!
//! ```rust
//! use rtfpad::rtf::{self, DecodeOptions, Document};
//!
//! let doc = Document::from_plain_text("Hello\nWorld");
//! let bytes = rtf::encode(&doc);
//! let back = rtf::decode_with(&bytes, &DecodeOptions::with_encoding(encoding_rs::UTF_8))?;
//! assert_eq!(back, doc);
//! # Ok::<(), rtfpad::rtf::RtfError>(())
//! ```

pub mod detection;
mod error;
pub mod escape;
mod reader;
pub mod state;
mod types;
mod writer;


// Re-exports
pub use error::{RtfError, RtfResult};
pub use reader::{DecodeOptions, MissingColorTable, decode, decode_with};
pub use types::{Attribute, Document, Paragraph, Position, Run, Style, TextRange};
pub use writer::{RtfWriter, encode, encode_to, render};

use crate::common::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// File extension of RTF documents.
pub const FILE_EXTENSION: &str = "rtf";

/// File picker filter for RTF documents.
pub const FILE_FILTER: &str = "Rich Text Files (*.rtf)";

/// Read and decode an RTF file.
///
/// I/O failures surface as [`crate::common::Error::Io`], a bad signature as
/// [`crate::common::Error::InvalidFormat`].
pub fn load<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let doc = decode_with(&bytes, options)?;
    log::info!("loaded {} ({} paragraphs)", path.display(), doc.paragraph_count());
    Ok(doc)
}

/// Encode a document and write it to `path`.
///
/// The stream is assembled before the file is created, so a failure to open
/// the destination leaves it untouched.
pub fn save<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode(doc);
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    log::info!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
