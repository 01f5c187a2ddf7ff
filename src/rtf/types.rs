//! Document type definitions.
//!
//! A [`Document`] is an ordered list of [`Paragraph`]s, each an ordered list
//! of [`Run`]s carrying one [`Style`]. Only bold, italic and underline are
//! modeled.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One of the three character attributes.
///
/// [`Attribute::ALL`] lists them in the order the writer tests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Bold weight (`\b`)
    Bold,
    /// Italic slant (`\i`)
    Italic,
    /// Single underline (`\ul`)
    Underline,
}

impl Attribute {
    /// All attributes, bold first, then italic, then underline.
    pub const ALL: [Attribute; 3] = [Attribute::Bold, Attribute::Italic, Attribute::Underline];

    /// The RTF control word that switches this attribute on.
    #[inline]
    pub const fn control_word(self) -> &'static str {
        match self {
            Attribute::Bold => "b",
            Attribute::Italic => "i",
            Attribute::Underline => "ul",
        }
    }
}

/// Character formatting triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
}

impl Style {
    /// No formatting.
    pub const PLAIN: Style = Style::new(false, false, false);
    /// Bold only.
    pub const BOLD: Style = Style::new(true, false, false);
    /// Italic only.
    pub const ITALIC: Style = Style::new(false, true, false);
    /// Underline only.
    pub const UNDERLINE: Style = Style::new(false, false, true);

    /// Create a new style.
    #[inline]
    pub const fn new(bold: bool, italic: bool, underline: bool) -> Self {
        Self {
            bold,
            italic,
            underline,
        }
    }

    /// Whether `attribute` is set.
    #[inline]
    pub const fn get(self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Bold => self.bold,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
        }
    }

    /// Set or clear `attribute`.
    #[inline]
    pub fn set(&mut self, attribute: Attribute, enabled: bool) {
        match attribute {
            Attribute::Bold => self.bold = enabled,
            Attribute::Italic => self.italic = enabled,
            Attribute::Underline => self.underline = enabled,
        }
    }

    /// Copy of this style with `attribute` set to `enabled`.
    #[inline]
    pub fn with(mut self, attribute: Attribute, enabled: bool) -> Self {
        self.set(attribute, enabled);
        self
    }

    /// True when no attribute is set.
    #[inline]
    pub const fn is_plain(self) -> bool {
        !self.bold && !self.italic && !self.underline
    }
}

/// A span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: String,
    style: Style,
}

impl Run {
    /// Create a new run.
    #[inline]
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled run.
    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Text of the run.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style of the run.
    #[inline]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Whether the run holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph: an ordered list of non-empty runs.
///
/// Adjacent runs never share a style; [`Paragraph::push`] merges them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph (a blank line).
    #[inline]
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Create a paragraph holding a single unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut paragraph = Self::new();
        paragraph.push(Run::plain(text));
        paragraph
    }

    /// Builder form of [`Paragraph::push`].
    pub fn with(mut self, text: impl Into<String>, style: Style) -> Self {
        self.push(Run::new(text, style));
        self
    }

    /// Append a run. Empty runs are dropped; a run with the same style as the
    /// last one is merged into it.
    pub fn push(&mut self, run: Run) {
        if run.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == run.style => last.text.push_str(&run.text),
            _ => self.runs.push(run),
        }
    }

    /// The runs of this paragraph.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Whether this paragraph is a blank line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }

    /// Number of characters in the paragraph.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }

    /// Every character together with its effective style.
    pub fn chars(&self) -> impl Iterator<Item = (char, Style)> + '_ {
        self.runs
            .iter()
            .flat_map(|run| run.text.chars().map(move |ch| (ch, run.style)))
    }

    /// Set `attribute` on the characters in `range` (character offsets).
    ///
    /// The range is clamped to the paragraph.
    pub fn set_attribute(&mut self, range: Range<usize>, attribute: Attribute, enabled: bool) {
        if range.start >= range.end {
            return;
        }
        *self = self
            .chars()
            .enumerate()
            .map(|(idx, (ch, style))| {
                if range.contains(&idx) {
                    (ch, style.with(attribute, enabled))
                } else {
                    (ch, style)
                }
            })
            .collect();
    }
}

impl FromIterator<(char, Style)> for Paragraph {
    fn from_iter<I: IntoIterator<Item = (char, Style)>>(iter: I) -> Self {
        let mut paragraph = Paragraph::new();
        for (ch, style) in iter {
            match paragraph.runs.last_mut() {
                Some(last) if last.style == style => last.text.push(ch),
                _ => paragraph.runs.push(Run::new(ch, style)),
            }
        }
        paragraph
    }
}

/// A character position: paragraph index plus character offset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    /// Paragraph index
    pub paragraph: usize,
    /// Character offset within the paragraph
    pub offset: usize,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(paragraph: usize, offset: usize) -> Self {
        Self { paragraph, offset }
    }
}

/// A selection between two positions. The order of the endpoints does not
/// matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    /// Anchor
    pub start: Position,
    /// End
    pub end: Position,
}

impl TextRange {
    /// Create a new selection.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Selection inside a single paragraph.
    #[inline]
    pub fn within(paragraph: usize, offsets: Range<usize>) -> Self {
        Self::new(
            Position::new(paragraph, offsets.start),
            Position::new(paragraph, offsets.end),
        )
    }

    /// Endpoints in document order.
    fn ordered(self) -> (Position, Position) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// A styled document.
///
/// A document always holds at least one paragraph; the empty document is a
/// single blank paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create an empty document.
    #[inline]
    pub fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
        }
    }

    /// Build a document from paragraphs. An empty list yields the empty
    /// document.
    pub fn from_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        let mut paragraphs: Vec<Paragraph> = paragraphs.into_iter().collect();
        if paragraphs.is_empty() {
            paragraphs.push(Paragraph::new());
        }
        Self { paragraphs }
    }

    /// Build an unstyled document, one paragraph per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use rtfpad::rtf::Document;
    ///
    /// let doc = Document::from_plain_text("one\r\ntwo");
    /// assert_eq!(doc.paragraph_count(), 2);
    /// assert_eq!(doc.text(), "one\ntwo");
    /// ```
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_paragraphs(
            text.split('\n')
                .map(|line| Paragraph::plain(line.strip_suffix('\r').unwrap_or(line))),
        )
    }

    /// The paragraphs of this document.
    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs (at least one).
    #[inline]
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Append a paragraph.
    #[inline]
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// The last paragraph, where new text is appended.
    #[inline]
    pub fn last_paragraph_mut(&mut self) -> &mut Paragraph {
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// Whether the document is a single blank paragraph.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.len() == 1 && self.paragraphs[0].is_empty()
    }

    /// Plain text, paragraphs joined by `\n`.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Set `attribute` on every character of `range`.
    ///
    /// Positions past the end of a paragraph or of the document are clamped.
    pub fn set_attribute(&mut self, range: TextRange, attribute: Attribute, enabled: bool) {
        let (start, end) = range.ordered();
        let last = end.paragraph.min(self.paragraphs.len() - 1);

        for (idx, paragraph) in self
            .paragraphs
            .iter_mut()
            .enumerate()
            .take(last + 1)
            .skip(start.paragraph)
        {
            let from = if idx == start.paragraph { start.offset } else { 0 };
            let to = if idx == end.paragraph {
                end.offset
            } else {
                paragraph.char_len()
            };
            paragraph.set_attribute(from..to, attribute, enabled);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_one_paragraph() {
        let doc = Document::new();
        assert_eq!(doc.paragraph_count(), 1);
        assert!(doc.is_empty());
        assert_eq!(Document::from_paragraphs(Vec::new()), doc);
    }

    #[test]
    fn test_push_drops_empty_and_coalesces() {
        let mut para = Paragraph::new();
        para.push(Run::plain(""));
        assert!(para.is_empty());

        para.push(Run::new("He", Style::BOLD));
        para.push(Run::new("llo", Style::BOLD));
        para.push(Run::plain(" world"));
        assert_eq!(para.runs().len(), 2);
        assert_eq!(para.runs()[0].text(), "Hello");
        assert_eq!(para.text(), "Hello world");
    }

    #[test]
    fn test_chars_carry_run_style() {
        let para = Paragraph::new().with("ab", Style::ITALIC).with("c", Style::PLAIN);
        let chars: Vec<_> = para.chars().collect();
        assert_eq!(
            chars,
            vec![('a', Style::ITALIC), ('b', Style::ITALIC), ('c', Style::PLAIN)]
        );
    }

    #[test]
    fn test_style_accessors() {
        let style = Style::PLAIN.with(Attribute::Underline, true);
        assert_eq!(style, Style::UNDERLINE);
        assert!(style.get(Attribute::Underline));
        assert!(!style.get(Attribute::Bold));
        assert!(Style::default().is_plain());
    }

    #[test]
    fn test_paragraph_set_attribute_splits_runs() {
        let mut para = Paragraph::plain("Hello");
        para.set_attribute(1..3, Attribute::Bold, true);
        let runs: Vec<_> = para.runs().iter().map(|r| (r.text(), r.style())).collect();
        assert_eq!(
            runs,
            vec![("H", Style::PLAIN), ("el", Style::BOLD), ("lo", Style::PLAIN)]
        );

        para.set_attribute(0..5, Attribute::Bold, false);
        assert_eq!(para, Paragraph::plain("Hello"));
    }

    #[test]
    fn test_set_attribute_clamps_range() {
        let mut para = Paragraph::plain("abc");
        para.set_attribute(2..100, Attribute::Italic, true);
        assert_eq!(para, Paragraph::plain("ab").with("c", Style::ITALIC));

        para.set_attribute(3..1, Attribute::Italic, false);
        assert_eq!(para.runs().len(), 2);
    }

    #[test]
    fn test_document_set_attribute_across_paragraphs() {
        let mut doc = Document::from_plain_text("abc\ndef\nghi");
        let range = TextRange::new(Position::new(2, 1), Position::new(0, 2));
        doc.set_attribute(range, Attribute::Underline, true);

        let paras = doc.paragraphs();
        assert_eq!(paras[0], Paragraph::plain("ab").with("c", Style::UNDERLINE));
        assert_eq!(paras[1], Paragraph::new().with("def", Style::UNDERLINE));
        assert_eq!(paras[2], Paragraph::new().with("g", Style::UNDERLINE).with("hi", Style::PLAIN));
    }

    #[test]
    fn test_document_set_attribute_past_end() {
        let mut doc = Document::from_plain_text("ab");
        doc.set_attribute(TextRange::within(5, 0..3), Attribute::Bold, true);
        assert_eq!(doc, Document::from_plain_text("ab"));
    }

    #[test]
    fn test_from_plain_text_keeps_blank_lines() {
        let doc = Document::from_plain_text("a\n\nb\n");
        assert_eq!(doc.paragraph_count(), 4);
        assert!(doc.paragraphs()[1].is_empty());
        assert!(doc.paragraphs()[3].is_empty());
        assert_eq!(doc.text(), "a\n\nb\n");
    }
}
