//! Character classification predicates.
//!
//! Pure functions over a single `char`. ASCII is decided by byte range
//! first; the Unicode general-category tables are only consulted above
//! `0x7F`.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Reports whether `c` is a space or horizontal tab.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Reports whether `c` is an end-of-line character (`\r` or `\n`).
#[inline]
pub fn is_end_of_line(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Space, tab, line feed or carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    is_space(c) || is_end_of_line(c)
}

/// Identifier start: ASCII letters, `_`, or a Unicode letter (general
/// category `Lu`, `Ll`, `Lt`, `Lm` or `Lo`).
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic() || c == '_';
    }
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Number start: a Unicode decimal digit (general category `Nd`).
///
/// Other numeric categories (`Nl` letter-numbers like `Ⅻ`, `No` forms like
/// `²` or `½`) are neither digits nor letters.
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Identifier continuation.
#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}
