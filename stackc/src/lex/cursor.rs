//! Character scanner.
use std::str::CharIndices;

/// Sentinel returned by the cursor once the source is exhausted.
///
/// Source text may contain literal null characters, so
/// [`Cursor::at_end`] must be consulted to tell the two apart.
pub const EOF_CHAR: char = '\0';

pub struct Cursor<'a> {
    chars: CharIndices<'a>,
    /// Byte offset and value of the character under the cursor.
    current: (u32, char),
    /// Total number of bytes in the source.
    len: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices(),
            // Nothing has been scanned yet. The owner is
            // expected to prime the cursor with `next()`.
            current: (0, EOF_CHAR),
            len: source.len() as u32,
        }
    }

    /// Character under the cursor.
    #[inline]
    pub fn current(&self) -> char {
        self.current.1
    }

    /// Byte offset of the character under the cursor.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.current.0
    }

    /// Character following the cursor, without advancing.
    #[inline]
    pub fn peek(&self) -> char {
        self.chars.clone().next().map(|(_, c)| c).unwrap_or(EOF_CHAR)
    }

    /// Byte offset of the character following the cursor. This is
    /// also the exclusive end of the character under the cursor.
    #[inline]
    pub fn peek_offset(&self) -> u32 {
        self.chars
            .clone()
            .next()
            .map(|(i, _)| i as u32)
            .unwrap_or(self.len)
    }

    /// Advance the cursor and return the new current character.
    pub fn next(&mut self) -> char {
        self.current = match self.chars.next() {
            Some((index, c)) => (index as u32, c),
            None => (self.len, EOF_CHAR),
        };
        self.current.1
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.current.0 >= self.len
    }
}
