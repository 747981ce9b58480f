use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::from("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::from("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"hello");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn utf8_multibyte_source() {
    let source = "hello \u{1F600} world"; // emoji (4 bytes)
    let buf = SourceBuffer::from(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
    assert!(buf.encoding_issues().is_empty());
}

// === Slicing ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::from("hello world");
    assert_eq!(buf.slice(Span::new(0, 5)), "hello");
    assert_eq!(buf.slice(Span::new(6, 11)), "world");
    assert_eq!(buf.slice(Span::new(3, 3)), "");
}

#[test]
fn slice_respects_multibyte_boundaries() {
    let buf = SourceBuffer::from("café");
    assert_eq!(buf.slice(Span::new(0, 5)), "café");
    // Splitting the two-byte 'é' is not a valid slice.
    assert_eq!(buf.slice(Span::new(0, 4)), "");
}

#[test]
fn slice_out_of_range_is_empty() {
    let buf = SourceBuffer::from("abc");
    assert_eq!(buf.slice(Span::new(1, 10)), "");
}

// === BOM Detection ===

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::from("\u{FEFF}hello");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn detects_utf16_le_bom() {
    let buf = SourceBuffer::new(vec![0xFF, 0xFE, b'h', 0x00]);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf16LeBom);
    assert_eq!(buf.encoding_issues()[0].len, 2);
    // The BOM itself is not reported a second time as invalid UTF-8.
    assert!(buf
        .encoding_issues()
        .iter()
        .all(|i| i.kind != EncodingIssueKind::InvalidUtf8));
}

#[test]
fn detects_utf16_be_bom() {
    let buf = SourceBuffer::new(vec![0xFE, 0xFF, 0x00, b'h']);
    assert_eq!(buf.encoding_issues()[0].kind, EncodingIssueKind::Utf16BeBom);
}

#[test]
fn no_bom_in_clean_source() {
    let buf = SourceBuffer::from("let x = 42");
    assert!(buf.encoding_issues().is_empty());
}

// === Interior Null Detection ===

#[test]
fn detects_multiple_interior_nulls() {
    let buf = SourceBuffer::from("\0ab\0c\0");
    let nulls: Vec<u32> = buf
        .encoding_issues()
        .iter()
        .filter(|i| i.kind == EncodingIssueKind::InteriorNull)
        .map(|i| i.pos)
        .collect();
    assert_eq!(nulls, vec![0, 3, 5]);
}

// === Invalid UTF-8 ===

#[test]
fn detects_first_invalid_sequence() {
    let buf = SourceBuffer::new(vec![b'a', b'b', 0xFF, b'c', 0xFE]);
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 2,
            len: 1,
        }]
    );
}

#[test]
fn detects_truncated_trailing_character() {
    // First two bytes of the three-byte encoding of '€'.
    let buf = SourceBuffer::new(vec![b'x', 0xE2, 0x82]);
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::InvalidUtf8,
            pos: 1,
            len: 2,
        }]
    );
}

// === Multiple Issues ===

#[test]
fn issues_are_reported_in_source_order() {
    let mut bytes = "\u{FEFF}a\0".as_bytes().to_vec();
    bytes.push(0xC0);
    let buf = SourceBuffer::new(bytes);
    let kinds: Vec<_> = buf.encoding_issues().iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EncodingIssueKind::Utf8Bom,
            EncodingIssueKind::InteriorNull,
            EncodingIssueKind::InvalidUtf8,
        ]
    );
}

// === Cursor Creation ===

#[test]
fn cursor_is_primed_on_first_character() {
    let buf = SourceBuffer::from("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), Some('h'));
    assert_eq!(cursor.char_start(), crate::Position::START);
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::from("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}
