use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(TokenKind::Ident as u8, 0);
    assert_eq!(TokenKind::Number as u8, 1);
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::Ident.to_string(), "Ident");
    assert_eq!(TokenKind::Number.to_string(), "Number");
    assert_eq!(format!("{}", TokenKind::Eof), "Eof");
}

#[test]
fn eof_token() {
    let token = Token {
        kind: TokenKind::Eof,
        span: Span::new(4, 4),
        start: Position::new(4, 1, 4),
    };
    assert!(token.is_eof());
    assert!(token.span.is_empty());
}
