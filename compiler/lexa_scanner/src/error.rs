//! Scanner errors.

use crate::Position;

/// Everything that can go wrong while building or driving a
/// [`Scanner`](crate::Scanner).
///
/// `Io` and `InputTooLarge` happen only at construction; no scanner exists
/// afterwards. The scan-time variants leave the scanner usable:
/// `UnclassifiedLexeme` consumes the offending character, and
/// `MalformedInput` is returned again on every later call.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The input source could not be read to completion.
    #[error("failed to read scanner input: {0}")]
    Io(#[from] std::io::Error),

    /// The input exceeds the configured size limit.
    #[error("input is {len} bytes, exceeding the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: u32 },

    /// A character that starts no known lexeme.
    #[error("unexpected character {ch:?} at {position}")]
    UnclassifiedLexeme { ch: char, position: Position },

    /// Bytes that do not decode as UTF-8, under
    /// [`MalformedPolicy::Reject`](crate::MalformedPolicy::Reject).
    #[error("malformed UTF-8 byte 0x{byte:02X} at {position}")]
    MalformedInput { byte: u8, position: Position },
}

impl ScanError {
    /// Source position of a scan-time error.
    pub fn position(&self) -> Option<Position> {
        match self {
            ScanError::UnclassifiedLexeme { position, .. }
            | ScanError::MalformedInput { position, .. } => Some(*position),
            ScanError::Io(_) | ScanError::InputTooLarge { .. } => None,
        }
    }
}
