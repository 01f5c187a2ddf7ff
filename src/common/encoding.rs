//! Character encoding utilities for RTF input.
//!
//! RTF control words are plain ASCII, but the literal text between them is
//! stored in whatever 8-bit encoding the producing machine used. The reader
//! decodes input with the process's *local* encoding, resolved here from the
//! locale environment and mapped onto `encoding_rs` encodings.

use crate::common::{Error, Result};
use encoding_rs::Encoding;
use std::borrow::Cow;

/// Locale variables consulted for the local encoding, in POSIX precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Map a Windows codepage identifier to an `encoding_rs` encoding.
///
/// Only the single-byte and common multi-byte code pages that show up as
/// `\ansicpg` values in practice are covered.
///
/// # Examples
/// ```
/// use rtfpad::common::encoding::codepage_to_encoding;
///
/// let encoding = codepage_to_encoding(1251).unwrap();
/// assert_eq!(encoding.name(), "windows-1251");
/// ```
#[inline]
pub fn codepage_to_encoding(codepage: u32) -> Option<&'static Encoding> {
    match codepage {
        874 => Some(encoding_rs::WINDOWS_874),   // Thai
        1250 => Some(encoding_rs::WINDOWS_1250), // Central European
        1251 => Some(encoding_rs::WINDOWS_1251), // Cyrillic
        1252 => Some(encoding_rs::WINDOWS_1252), // Western European (default ANSI)
        1253 => Some(encoding_rs::WINDOWS_1253), // Greek
        1254 => Some(encoding_rs::WINDOWS_1254), // Turkish
        1255 => Some(encoding_rs::WINDOWS_1255), // Hebrew
        1256 => Some(encoding_rs::WINDOWS_1256), // Arabic
        1257 => Some(encoding_rs::WINDOWS_1257), // Baltic
        1258 => Some(encoding_rs::WINDOWS_1258), // Vietnamese
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        10000 => Some(encoding_rs::MACINTOSH),
        20866 => Some(encoding_rs::KOI8_R),
        65001 => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

/// Resolve a user-supplied encoding name.
///
/// Accepts WHATWG labels (`"utf-8"`, `"latin1"`, `"windows-1252"`, ...) and
/// bare Windows codepage numbers (`"1252"`).
///
/// # Examples
/// ```
/// use rtfpad::common::encoding::resolve_label;
///
/// assert_eq!(resolve_label("latin1").unwrap(), encoding_rs::WINDOWS_1252);
/// assert_eq!(resolve_label("1251").unwrap(), encoding_rs::WINDOWS_1251);
/// assert!(resolve_label("no-such-charset").is_err());
/// ```
pub fn resolve_label(label: &str) -> Result<&'static Encoding> {
    let label = label.trim();
    if let Ok(codepage) = label.parse::<u32>() {
        return codepage_to_encoding(codepage).ok_or_else(|| Error::UnknownEncoding(label.to_string()));
    }
    Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Extract the encoding named by a POSIX locale string.
///
/// `"en_US.UTF-8"` and `"de_DE.ISO-8859-15@euro"` carry their charset after
/// the dot. The `C` and `POSIX` locales are 7-bit and map to Windows-1252,
/// which is a superset of ASCII. Anything else yields `None`.
pub fn encoding_from_locale(locale: &str) -> Option<&'static Encoding> {
    let locale = locale.trim();
    if locale == "C" || locale == "POSIX" {
        return Some(encoding_rs::WINDOWS_1252);
    }

    let (_, charset) = locale.split_once('.')?;
    let charset = charset.split('@').next().unwrap_or(charset);
    Encoding::for_label(charset.as_bytes())
}

/// The local 8-bit encoding of this process.
///
/// On Unix this follows the first non-empty of `LC_ALL`, `LC_CTYPE` and
/// `LANG`, and falls back to UTF-8 when none names a known charset. On
/// Windows the ANSI code page is assumed to be 1252.
pub fn local_8bit_encoding() -> &'static Encoding {
    if cfg!(windows) {
        return encoding_rs::WINDOWS_1252;
    }

    let locale = LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty());

    match locale.as_deref().and_then(encoding_from_locale) {
        Some(encoding) => encoding,
        None => {
            log::debug!("no charset in locale {locale:?}, assuming UTF-8");
            encoding_rs::UTF_8
        },
    }
}

/// Decode raw bytes with the given 8-bit encoding.
///
/// Malformed sequences are replaced by U+FFFD. A byte order mark is not
/// treated specially: RTF input starts with `{`, never with a BOM.
///
/// # Examples
/// ```
/// use rtfpad::common::encoding::decode_local;
///
/// let text = decode_local(b"caf\xe9", encoding_rs::WINDOWS_1252);
/// assert_eq!(text, "café");
/// ```
#[inline]
pub fn decode_local<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        log::warn!("input is not valid {}, malformed bytes replaced", encoding.name());
    }
    text
}

/// Serde adapter storing an encoding as its WHATWG label.
///
/// Use with `#[serde(with = "crate::common::encoding::label")]`.
pub mod label {
    use encoding_rs::Encoding;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(encoding: &&'static Encoding, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(encoding.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<&'static Encoding, D::Error> {
        let label = String::deserialize(deserializer)?;
        super::resolve_label(&label).map_err(de::Error::custom)
    }
}
