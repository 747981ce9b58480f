//! Pull-based lexical scanner.
//!
//! Converts a fully buffered byte stream into classified tokens with
//! byte/line/column metadata. The pieces, bottom-up:
//!
//! - [`SourceBuffer`]: owned, immutable input plus encoding diagnostics.
//! - [`Cursor`]: value-type UTF-8 decode cursor with position bookkeeping.
//! - [`char_class`]: pure character classification predicates.
//! - [`Scanner`]: skips whitespace, recognizes lexeme boundaries and hands
//!   back one [`Token`] per call.
//!
//! ```
//! use lexa_scanner::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("  foo\t bar")?;
//! assert_eq!(scanner.scan()?, (TokenKind::Ident, "foo"));
//! assert_eq!(scanner.scan()?, (TokenKind::Ident, "bar"));
//! assert_eq!(scanner.scan()?, (TokenKind::Eof, ""));
//! # Ok::<(), lexa_scanner::ScanError>(())
//! ```

pub mod char_class;
mod config;
mod cursor;
mod error;
mod position;
mod scanner;
mod source_buffer;
mod token;

pub use config::{MalformedPolicy, ScannerConfig};
pub use cursor::{utf8_char_width, Cursor};
pub use error::ScanError;
pub use position::{Position, Span};
pub use scanner::{Scanner, Tokens};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{Token, TokenKind};
