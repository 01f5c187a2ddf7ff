//! RTF reader.
//!
//! The reader recovers plain text only. It skips everything up to the end of
//! the `\colortbl` group, drops the closing brace and splits the rest on
//! `\par`. Control words inside the content (`\b`, `\i`, `\ul`), escaped
//! braces and escaped backslashes are not interpreted and stay in the text.
//!
//! # Example
//!
//! ```rust
//! use rtfpad::rtf::decode;
//!
//! let rtf = b"{\\rtf1{\\colortbl;\\red0\\green0\\blue0;}\nHello\\par\nWorld}";
//! let doc = decode(rtf)?;
//! assert_eq!(doc.text(), "Hello\nWorld");
//! # Ok::<(), rtfpad::rtf::RtfError>(())
//! ```

use super::detection::has_rtf_signature;
use super::error::{RtfError, RtfResult};
use super::types::{Document, Paragraph, Run};
use crate::common::encoding::{self, decode_local};
use encoding_rs::Encoding;
use memchr::memmem;
use serde::{Deserialize, Serialize};

/// Control word anchoring the start of the content.
const COLOR_TABLE: &str = "\\colortbl";

/// Paragraph separator.
const PARAGRAPH_BREAK: &str = "\\par";

/// What to do with input that has no `\colortbl` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingColorTable {
    /// Keep the whole text, header included, as content.
    #[default]
    PassThrough,
    /// Fail with [`RtfError::MissingColorTable`].
    Reject,
}

/// Decoder options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// 8-bit encoding of the literal text
    #[serde(with = "crate::common::encoding::label")]
    pub encoding: &'static Encoding,
    /// Handling of input without a color table
    #[serde(default)]
    pub missing_color_table: MissingColorTable,
}

impl DecodeOptions {
    /// Options with an explicit text encoding.
    pub fn with_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            missing_color_table: MissingColorTable::default(),
        }
    }

    /// Set the policy for input without a color table.
    pub fn missing_color_table(mut self, policy: MissingColorTable) -> Self {
        self.missing_color_table = policy;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::with_encoding(encoding::local_8bit_encoding())
    }
}

/// Decode RTF bytes with the default options.
pub fn decode(bytes: &[u8]) -> RtfResult<Document> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode RTF bytes.
///
/// Fails with [`RtfError::InvalidSignature`] unless the input starts with
/// `{\rtf`.
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> RtfResult<Document> {
    if !has_rtf_signature(bytes) {
        return Err(RtfError::InvalidSignature);
    }

    log::debug!("decoding {} bytes as {}", bytes.len(), options.encoding.name());
    let text = decode_local(bytes, options.encoding);

    let content = content_after_color_table(&text, options.missing_color_table)?;
    let content = content.strip_suffix('}').unwrap_or(content);

    let mut doc = Document::new();
    for (idx, segment) in content.split(PARAGRAPH_BREAK).enumerate() {
        if idx > 0 {
            doc.push_paragraph(Paragraph::new());
        }
        let line = segment.trim();
        if !line.is_empty() {
            doc.last_paragraph_mut().push(Run::plain(line));
        }
    }

    log::debug!("decoded {} paragraphs", doc.paragraph_count());
    Ok(doc)
}

/// Slice `text` to what follows the brace closing the `\colortbl` group.
///
/// When the group is never closed the whole text is kept.
fn content_after_color_table(text: &str, policy: MissingColorTable) -> RtfResult<&str> {
    let Some(anchor) = memmem::find(text.as_bytes(), COLOR_TABLE.as_bytes()) else {
        return match policy {
            MissingColorTable::PassThrough => {
                log::warn!("no \\colortbl group, keeping the whole stream as content");
                Ok(text)
            },
            MissingColorTable::Reject => Err(RtfError::MissingColorTable),
        };
    };

    match memchr::memchr(b'}', &text.as_bytes()[anchor..]) {
        Some(offset) => Ok(&text[anchor + offset + 1..]),
        None => {
            log::warn!("unterminated \\colortbl group, keeping the whole stream as content");
            Ok(text)
        },
    }
}
