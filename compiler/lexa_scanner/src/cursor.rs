//! Value-type UTF-8 decode cursor.
//!
//! The cursor holds no reference to the source: it is a small [`Copy`] record
//! of the current character and the running [`Position`], and every call that
//! moves it takes the source bytes as an argument. This keeps the cursor
//! independent of the buffer that owns the text, so the scanner can hold both
//! side by side.
//!
//! # End of Input
//!
//! When no bytes remain, or the bytes at the current offset do not decode as
//! UTF-8, [`current()`](Cursor::current) reports `None` and the cursor stops
//! moving. Advancing again is a no-op. The two cases are told apart by
//! comparing the offset against the source length: a stop before the end is
//! malformed input, a stop at the end is real EOF.

use crate::Position;

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Uses the leading byte to determine character width:
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
pub fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Decode the character at the front of `bytes` along with its width.
///
/// Returns `None` on empty input, truncated sequences and invalid encodings.
fn decode_char(bytes: &[u8]) -> Option<(char, u32)> {
    let width = utf8_char_width(*bytes.first()?);
    let encoded = bytes.get(..width as usize)?;
    let ch = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((ch, width))
}

/// Decode cursor over a source buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor),
/// already primed on the first character.
///
/// # Invariant
///
/// `start.offset + width == pos.offset` while a character is current;
/// at end of input `width == 0` and `start == pos`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Current character, `None` at end of input.
    current: Option<char>,
    /// Encoded width of `current` in bytes.
    width: u32,
    /// Where `current` begins.
    start: Position,
    /// Running position just past `current`.
    pos: Position,
    /// Length of the source content in bytes.
    source_len: u32,
}

/// Size assertion: Cursor should stay a handful of words.
const _: () = assert!(std::mem::size_of::<Cursor>() <= 40);

impl Cursor {
    /// Create a cursor over `src` and decode its first character.
    pub(crate) fn new(src: &[u8]) -> Self {
        let mut cursor = Self {
            current: None,
            width: 0,
            start: Position::START,
            pos: Position::START,
            source_len: u32::try_from(src.len()).unwrap_or(u32::MAX),
        };
        cursor.advance(src);
        cursor
    }

    /// Decode the next character from `src`, making it current.
    ///
    /// Offset and column move by the character's encoded width; a `\n` then
    /// increments the line and resets the column to 0. At end of input (or
    /// on undecodable bytes) the position is left untouched and `None` is
    /// returned, on this and every later call.
    pub fn advance(&mut self, src: &[u8]) -> Option<char> {
        self.start = self.pos;
        let rest = src.get(self.pos.offset as usize..).unwrap_or_default();
        match decode_char(rest) {
            Some((ch, width)) => {
                self.pos.advance(ch, width);
                self.current = Some(ch);
                self.width = width;
            }
            None => {
                self.current = None;
                self.width = 0;
            }
        }
        self.current
    }

    /// Decode the character after the current one without moving.
    pub fn peek(&self, src: &[u8]) -> Option<char> {
        self.current?;
        let rest = src.get(self.pos.offset as usize..)?;
        decode_char(rest).map(|(ch, _)| ch)
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Stops at end of input, since there is no character to test.
    #[inline]
    pub fn eat_while(&mut self, src: &[u8], pred: impl Fn(char) -> bool) {
        while self.current.is_some_and(&pred) {
            self.advance(src);
        }
    }

    /// The current character, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Encoded byte width of the current character (0 at end of input).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Position where the current character begins.
    ///
    /// This is also the position immediately after everything consumed
    /// before it.
    #[inline]
    pub fn char_start(&self) -> Position {
        self.start
    }

    /// Running position just past the current character.
    #[inline]
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Returns `true` if no character is current.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    /// Returns `true` if decoding stopped before the end of the source.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.current.is_none() && self.pos.offset < self.source_len
    }
}
