//! RTF signature detection.
//!
//! RTF files start with the literal `{\rtf`, usually followed by a version
//! number. The check is case-sensitive and tolerates no leading whitespace.

use std::io::{Read, Seek, SeekFrom};

/// RTF signature, `{\rtf`.
pub const RTF_SIGNATURE: &[u8] = b"{\\rtf";

/// Check the signature of in-memory content.
///
/// # Examples
///
/// ```rust
/// use rtfpad::rtf::detection::has_rtf_signature;
///
/// assert!(has_rtf_signature(b"{\\rtf1\\ansi Hello}"));
/// assert!(!has_rtf_signature(b"Plain text file"));
/// ```
#[inline]
pub fn has_rtf_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(RTF_SIGNATURE)
}

/// Check the signature of a reader.
///
/// Reads the first bytes, then rewinds the reader to the start. Read errors
/// count as "not RTF".
pub fn has_rtf_signature_from_reader<R: Read + Seek>(reader: &mut R) -> bool {
    let mut buffer = [0u8; RTF_SIGNATURE.len()];
    let matched = reader.read_exact(&mut buffer).is_ok() && has_rtf_signature(&buffer);

    // Reset to beginning
    let _ = reader.seek(SeekFrom::Start(0));

    matched
}
