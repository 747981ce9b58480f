//! Token kinds and scanned tokens.

use std::fmt;

use crate::{Position, Span};

/// Lexical category of a token.
///
/// `#[repr(u8)]` with reserved discriminant ranges so operator and keyword
/// kinds can be added later without renumbering:
/// - Identifiers & Literals: 0-15
/// - Operators: 32-79
/// - Keywords: 80-111
/// - Control: 255
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Letter followed by letters or digits.
    Ident = 0,
    /// Digit run with an optional `.digits` fraction.
    Number = 1,
    /// End of input. Always carries an empty literal.
    Eof = 255,
}

impl TokenKind {
    /// Short display name used in diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "Ident",
            TokenKind::Number => "Number",
            TokenKind::Eof => "Eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: kind, byte span and the position where it starts.
///
/// The literal text is not stored; read it back with
/// [`Scanner::slice`](crate::Scanner::slice) or, for the latest token,
/// [`Scanner::token_literal`](crate::Scanner::token_literal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub start: Position,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests;
