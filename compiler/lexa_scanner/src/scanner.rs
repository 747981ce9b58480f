//! The pull-based scanner.
//!
//! [`Scanner`] owns the whole input and a [`Cursor`] into it. Each call to
//! [`scan`](Scanner::scan) skips whitespace, recognizes exactly one lexeme
//! and records its `[start, end)` span. Literals are slices of the owned
//! buffer, never copies.
//!
//! # Lookahead
//!
//! The cursor always rests on the first character not yet part of any
//! token. Recognizing an identifier stops *on* the character that ends it,
//! and the next scan starts from there, so that character is examined
//! rather than skipped.

use std::io::Read;

use tracing::{debug, trace};

use crate::char_class::{is_digit, is_letter, is_letter_or_digit, is_whitespace};
use crate::{
    Cursor, MalformedPolicy, Position, ScanError, ScannerConfig, SourceBuffer, Span, Token,
    TokenKind,
};

/// Lexical scanner over a fully buffered input.
///
/// Not thread-safe by sharing: every operation takes `&mut self`, so give
/// each scanner a single owner.
#[derive(Clone, Debug)]
pub struct Scanner {
    source: SourceBuffer,
    cursor: Cursor,
    config: ScannerConfig,
    /// Span of the most recent lexeme. `None` until the first scan.
    span: Option<Span>,
}

impl Scanner {
    /// Create a scanner over a string with the default configuration.
    pub fn new(source: &str) -> Result<Self, ScanError> {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    /// Create a scanner that takes ownership of `bytes`.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ScanError> {
        Self::from_bytes_with_config(bytes, ScannerConfig::default())
    }

    /// Read `reader` to completion and scan its contents.
    ///
    /// The reader is consumed eagerly; it is never touched again after this
    /// returns. A read failure yields [`ScanError::Io`] and no scanner.
    pub fn from_reader(reader: impl Read) -> Result<Self, ScanError> {
        Self::from_reader_with_config(reader, ScannerConfig::default())
    }

    pub fn from_reader_with_config(
        mut reader: impl Read,
        config: ScannerConfig,
    ) -> Result<Self, ScanError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes_with_config(bytes, config)
    }

    pub fn from_bytes_with_config(
        bytes: Vec<u8>,
        config: ScannerConfig,
    ) -> Result<Self, ScanError> {
        let len = bytes.len();
        let fits = u32::try_from(len).is_ok_and(|len| len <= config.max_source_len);
        if !fits {
            return Err(ScanError::InputTooLarge {
                len,
                limit: config.max_source_len,
            });
        }

        let source = SourceBuffer::new(bytes);
        debug!(
            len,
            encoding_issues = source.encoding_issues().len(),
            "scanner input buffered"
        );
        let cursor = source.cursor();
        Ok(Self {
            source,
            cursor,
            config,
            span: None,
        })
    }

    // ─── Scanning ──────────────────────────────────────────────────

    /// Scan the next lexeme and return its kind and literal text.
    ///
    /// Returns `(TokenKind::Eof, "")` once the input is exhausted, and keeps
    /// returning it on every later call.
    pub fn scan(&mut self) -> Result<(TokenKind, &str), ScanError> {
        let token = self.next_token()?;
        Ok((token.kind, self.source.slice(token.span)))
    }

    /// Scan the next lexeme and return it as a [`Token`].
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        self.cursor.eat_while(self.source.as_bytes(), is_whitespace);

        let start = self.cursor.char_start();
        let kind = match self.cursor.current() {
            Some(c) if is_letter(c) => self.identifier(),
            Some(c) if is_digit(c) => self.number(),
            Some(c) => return Err(self.unclassified(c, start)),
            None => self.end_of_input(start)?,
        };

        let span = Span::new(start.offset, self.cursor.char_start().offset);
        self.span = Some(span);
        trace!(%kind, %span, literal = self.source.slice(span), "token");
        Ok(Token { kind, span, start })
    }

    /// Iterate over the remaining tokens, up to and including `Eof`.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens {
            scanner: self,
            exhausted: false,
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let src = self.source.as_bytes();
        self.cursor.advance(src);
        self.cursor.eat_while(src, is_letter_or_digit);
        TokenKind::Ident
    }

    /// Digit run, then an optional fraction: `.` counts only when a digit
    /// follows it.
    fn number(&mut self) -> TokenKind {
        let src = self.source.as_bytes();
        self.cursor.eat_while(src, is_digit);
        if self.cursor.current() == Some('.') && self.cursor.peek(src).is_some_and(is_digit) {
            self.cursor.advance(src); // consume '.'
            self.cursor.eat_while(src, is_digit);
        }
        TokenKind::Number
    }

    /// Consume the offending character so the next scan makes progress.
    fn unclassified(&mut self, ch: char, start: Position) -> ScanError {
        self.cursor.advance(self.source.as_bytes());
        self.span = Some(Span::new(start.offset, self.cursor.char_start().offset));
        debug!(?ch, %start, "unclassified character");
        ScanError::UnclassifiedLexeme {
            ch,
            position: start,
        }
    }

    fn end_of_input(&mut self, start: Position) -> Result<TokenKind, ScanError> {
        if self.config.malformed == MalformedPolicy::Reject && self.cursor.is_malformed() {
            let byte = self
                .source
                .as_bytes()
                .get(start.offset as usize)
                .copied()
                .unwrap_or_default();
            self.span = Some(Span::new(start.offset, start.offset));
            debug!(byte, %start, "malformed input");
            return Err(ScanError::MalformedInput {
                byte,
                position: start,
            });
        }
        Ok(TokenKind::Eof)
    }

    // ─── Accessors ─────────────────────────────────────────────────

    /// Literal text of the most recently scanned lexeme.
    ///
    /// Returns `""` before the first scan. Reading it does not move the
    /// cursor or the span, so repeated calls agree.
    pub fn token_literal(&self) -> &str {
        self.span.map_or("", |span| self.source.slice(span))
    }

    /// Span of the most recently scanned lexeme, if any.
    pub fn token_span(&self) -> Option<Span> {
        self.span
    }

    /// Text covered by `span`, e.g. from a [`Token`] collected earlier.
    pub fn slice(&self, span: Span) -> &str {
        self.source.slice(span)
    }

    /// Position of the character immediately after the last returned token.
    ///
    /// Before any scan this is [`Position::START`]. At end of input it is
    /// the position just past the last decoded character.
    pub fn position(&self) -> Position {
        self.cursor.char_start()
    }

    /// The underlying source buffer, including its encoding diagnostics.
    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}

/// Iterator returned by [`Scanner::tokens`].
///
/// Scan errors are yielded in place. Iteration continues after an
/// unclassified character and stops after a malformed-input error, since
/// that error repeats forever.
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
    exhausted: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.scanner.next_token();
        self.exhausted = matches!(
            result,
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) | Err(ScanError::MalformedInput { .. })
        );
        Some(result)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
