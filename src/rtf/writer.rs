//! RTF document writer.
//!
//! The writer emits a fixed header (one Arial font, one black color), then
//! each paragraph character by character, switching bold, italic and
//! underline with minimal toggle commands. Paragraphs are joined by `\par`
//! and a newline; every paragraph starts unformatted. The stream is
//! assembled as text and written out as UTF-8.

use super::escape::{escape_text, needs_escape};
use super::state::{EncoderState, step};
use super::types::{Document, Paragraph};
use std::io::{self, Write};

/// RTF document writer.
///
/// Assembles the stream in memory; nothing is written to a sink until the
/// document is complete.
#[derive(Debug, Default)]
pub struct RtfWriter {
    /// Assembled stream
    out: String,
    /// Toggle state of the paragraph being written
    state: EncoderState,
}

impl RtfWriter {
    /// Create a new RTF writer
    pub fn new() -> Self {
        Self {
            out: String::new(),
            state: EncoderState::START,
        }
    }

    /// Write a complete RTF document
    pub fn write_document(&mut self, doc: &Document) {
        self.write_document_header();
        self.write_font_table();
        self.write_str("\n");
        self.write_color_table();
        self.write_str("\n");

        let mut paragraphs = doc.paragraphs().iter().peekable();
        while let Some(paragraph) = paragraphs.next() {
            self.write_paragraph(paragraph);
            if paragraphs.peek().is_some() {
                self.write_paragraph_break();
            }
        }

        // Close document
        self.write_str("}");
    }

    /// The assembled stream.
    pub fn finish(self) -> String {
        self.out
    }

    /// Write document header
    fn write_document_header(&mut self) {
        self.write_str("{");
        self.write_control_word("rtf", Some(1));
        self.write_control_word("ansi", None);
        self.write_control_word("deff", Some(0));
    }

    /// Write font table, a single Swiss font
    fn write_font_table(&mut self) {
        self.write_str("{");
        self.write_control_word("fonttbl", None);
        self.write_str("{");
        self.write_control_word("f", Some(0));
        self.write_control_word("fswiss", None);
        self.write_control_word("fcharset", Some(0));
        self.write_str(" Arial;");
        self.write_str("}");
        self.write_str("}");
    }

    /// Write color table: the auto color, then black
    fn write_color_table(&mut self) {
        self.write_str("{");
        self.write_control_word("colortbl", None);
        self.write_str(";");
        self.write_control_word("red", Some(0));
        self.write_control_word("green", Some(0));
        self.write_control_word("blue", Some(0));
        self.write_str(";");
        self.write_str("}");
    }

    /// Write the characters of one paragraph
    fn write_paragraph(&mut self, paragraph: &Paragraph) {
        self.state = EncoderState::START;

        for (ch, style) in paragraph.chars() {
            let (state, toggles) = step(self.state, style);
            for toggle in &toggles {
                toggle.write_to(&mut self.out);
            }

            let (state, space) = state.text();
            if space {
                self.write_str(" ");
            }
            self.write_char(ch);
            self.state = state;
        }
    }

    /// Write the separator between two paragraphs
    fn write_paragraph_break(&mut self) {
        self.write_control_word("par", None);
        self.write_str("\n");
        self.state = EncoderState::START;
    }

    /// Write a control word
    fn write_control_word(&mut self, word: &str, param: Option<i32>) {
        self.write_str("\\");
        self.write_str(word);
        if let Some(p) = param {
            let mut buf = itoa::Buffer::new();
            self.out.push_str(buf.format(p));
        }
    }

    /// Write one literal character (with proper escaping)
    fn write_char(&mut self, ch: char) {
        if needs_escape(ch) {
            let mut buf = [0u8; 4];
            let escaped = escape_text(ch.encode_utf8(&mut buf));
            self.out.push_str(&escaped);
        } else {
            self.out.push(ch);
        }
    }

    /// Write a string
    #[inline]
    fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }
}

/// Encode a document as RTF text.
pub fn render(doc: &Document) -> String {
    let mut writer = RtfWriter::new();
    writer.write_document(doc);
    writer.finish()
}

/// Encode a document as RTF bytes (UTF-8).
///
/// # Examples
///
/// ```rust
/// use rtfpad::rtf::{Document, Paragraph, Style, encode};
///
/// let doc = Document::from_paragraphs([Paragraph::new().with("Hi", Style::BOLD)]);
/// let bytes = encode(&doc);
/// assert!(bytes.ends_with(b"\n\\b Hi}"));
/// ```
pub fn encode(doc: &Document) -> Vec<u8> {
    let bytes = render(doc).into_bytes();
    log::debug!(
        "encoded {} paragraphs into {} bytes",
        doc.paragraph_count(),
        bytes.len()
    );
    bytes
}

/// Encode a document into a sink.
///
/// The stream is fully assembled before the first byte is written.
pub fn encode_to<W: Write>(doc: &Document, mut writer: W) -> io::Result<()> {
    writer.write_all(&encode(doc))?;
    writer.flush()
}
