//! Text escaping for the RTF writer.
//!
//! Literal text goes through two passes: HTML entity escaping first, then
//! RTF escaping of `\`, `{` and `}`. Entities never contain those three
//! characters, so the second pass cannot be defeated by the first.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

const HTML_SPECIAL: [&str; 4] = ["&", "<", ">", "\""];
const HTML_ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

const RTF_SPECIAL: [&str; 3] = ["\\", "{", "}"];
const RTF_ESCAPED: [&str; 3] = ["\\\\", "\\{", "\\}"];

// Static initialization: automata are built only once, thread-safe
static HTML_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(HTML_SPECIAL).expect("Failed to build HTML escaper"));

static RTF_ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(RTF_SPECIAL).expect("Failed to build RTF escaper"));

/// Whether `ch` is rewritten by either escaping pass.
#[inline]
pub fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\\' | '{' | '}')
}

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use rtfpad::rtf::escape::escape_html;
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<\"x\">"), "&lt;&quot;x&quot;&gt;");
/// ```
#[inline]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(HTML_ESCAPER.replace_all(s, &HTML_ENTITIES))
}

/// Escape the RTF group and control characters.
///
/// # Examples
///
/// ```
/// use rtfpad::rtf::escape::escape_rtf;
/// assert_eq!(escape_rtf(r"a\b{c}"), r"a\\b\{c\}");
/// ```
#[inline]
pub fn escape_rtf(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', '{', '}']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(RTF_ESCAPER.replace_all(s, &RTF_ESCAPED))
}

/// Full escaping applied to literal document text.
///
/// # Examples
///
/// ```
/// use rtfpad::rtf::escape::escape_text;
/// assert_eq!(escape_text("{a&b}"), r"\{a&amp;b\}");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
    match escape_html(s) {
        Cow::Borrowed(s) => escape_rtf(s),
        Cow::Owned(html) => Cow::Owned(escape_rtf(&html).into_owned()),
    }
}
