use super::*;

#[test]
fn start_is_line_one_column_zero() {
    assert_eq!(Position::START, Position::new(0, 1, 0));
}

#[test]
fn advance_ascii() {
    let mut pos = Position::START;
    pos.advance('a', 1);
    assert_eq!(pos, Position::new(1, 1, 1));
}

#[test]
fn advance_multibyte_counts_bytes() {
    let mut pos = Position::START;
    pos.advance('é', 2);
    pos.advance('\u{1F600}', 4);
    assert_eq!(pos, Position::new(6, 1, 6));
}

#[test]
fn newline_bumps_line_and_resets_column() {
    let mut pos = Position::START;
    pos.advance('a', 1);
    pos.advance('\n', 1);
    assert_eq!(pos, Position::new(2, 2, 0));
    pos.advance('b', 1);
    assert_eq!(pos, Position::new(3, 2, 1));
}

#[test]
fn carriage_return_is_not_a_line_break() {
    let mut pos = Position::START;
    pos.advance('\r', 1);
    assert_eq!(pos, Position::new(1, 1, 1));
}

#[test]
fn display_formats() {
    assert_eq!(Position::new(7, 3, 4).to_string(), "3:4");
    assert_eq!(Span::new(2, 5).to_string(), "2..5");
}

#[test]
fn span_len() {
    let span = Span::new(3, 8);
    assert_eq!(span.len(), 5);
    assert!(!span.is_empty());
    assert!(Span::new(4, 4).is_empty());
}
