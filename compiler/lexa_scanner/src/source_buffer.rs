//! Owned, immutable input buffer.
//!
//! The scanner reads its whole input up front, so every lexeme literal is a
//! plain slice of this buffer. Nothing is ever appended or rewritten after
//! construction.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans once for encoding issues:
//! - UTF-8 BOM (`EF BB BF`) and UTF-16 BOMs (wrong encoding)
//! - Interior null bytes
//! - The first invalid UTF-8 sequence
//!
//! Issues are recorded as [`EncodingIssue`] values. They are informational;
//! how the scanner reacts to undecodable bytes is governed by
//! [`MalformedPolicy`](crate::MalformedPolicy).

use crate::{Cursor, Span};

/// Owned source bytes plus the encoding issues found in them.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
///
/// Carries the kind, byte position, and byte length of the problematic
/// sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start. Scans as an unclassified character.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start. Wrong encoding.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start. Wrong encoding.
    Utf16BeBom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
    /// Bytes that do not form valid UTF-8. Only the first occurrence is
    /// recorded, since the cursor stops decoding there.
    InvalidUtf8,
}

impl SourceBuffer {
    /// Take ownership of `bytes` and scan them for encoding issues.
    ///
    /// Callers are expected to have checked the length against the configured
    /// limit; offsets beyond `u32::MAX` saturate in [`len()`](Self::len).
    pub fn new(bytes: Vec<u8>) -> Self {
        let mut encoding_issues = Vec::new();
        detect_encoding_issues(&bytes, &mut encoding_issues);
        Self {
            buf: bytes,
            encoding_issues,
        }
    }

    /// Returns the source bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] primed on the first character of the source.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(&self.buf)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        u32::try_from(self.buf.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Extract the text covered by `span`.
    ///
    /// Spans produced by the scanner always fall on character boundaries of
    /// successfully decoded input. Any other span that is out of range or
    /// splits a character yields `""`.
    pub fn slice(&self, span: Span) -> &str {
        self.buf
            .get(span.start as usize..span.end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Encoding issues detected during construction, in source order.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source.as_bytes().to_vec())
    }
}

/// Detect BOM, interior null byte and invalid UTF-8 issues in source bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
    detect_invalid_utf8(source, issues);
    issues.sort_by_key(|issue| issue.pos);
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let (kind, len) = match source {
        [0xEF, 0xBB, 0xBF, ..] => (EncodingIssueKind::Utf8Bom, 3),
        [0xFF, 0xFE, ..] => (EncodingIssueKind::Utf16LeBom, 2),
        [0xFE, 0xFF, ..] => (EncodingIssueKind::Utf16BeBom, 2),
        _ => return,
    };
    issues.push(EncodingIssue { kind, pos: 0, len });
}

/// Detect null bytes (U+0000) within the source content.
///
/// Uses `memchr` for SIMD-accelerated null byte search instead of
/// byte-at-a-time iteration.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(memchr::memchr_iter(0, source).filter_map(|pos| {
        Some(EncodingIssue {
            kind: EncodingIssueKind::InteriorNull,
            pos: u32::try_from(pos).ok()?,
            len: 1,
        })
    }));
}

/// Record the first invalid UTF-8 sequence, if any.
///
/// UTF-16 BOM bytes are already reported with a more specific kind, so a
/// failure at offset 0 behind one of those is not repeated.
fn detect_invalid_utf8(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let Err(err) = std::str::from_utf8(source) else {
        return;
    };
    let pos = err.valid_up_to();
    let utf16_bom = matches!(
        issues.first().map(|issue| issue.kind),
        Some(EncodingIssueKind::Utf16LeBom | EncodingIssueKind::Utf16BeBom)
    );
    if pos == 0 && utf16_bom {
        return;
    }
    // `error_len() == None` means the input ends mid-character.
    let len = err.error_len().unwrap_or(source.len() - pos);
    if let (Ok(pos), Ok(len)) = (u32::try_from(pos), u32::try_from(len)) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos,
            len,
        });
    }
}

#[cfg(test)]
mod tests;
