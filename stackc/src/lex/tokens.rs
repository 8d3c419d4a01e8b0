//! Tokens

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    pub kind: TokenKind,
    /// Parsed value of an integer literal.
    pub value: Option<i64>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            span,
            kind,
            value: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[rustfmt::skip]
pub enum TokenKind {
    Plus,   // +
    Minus,  // -
    Star,   // *
    Slash,  // /
    LParen, // (
    RParen, // )

    /// Decimal integer literal
    Integer,

    /// End of source. Emitted for every request once the source is exhausted.
    EndOfInput,
}

/// Human readable description, used in diagnostics.
impl fmt::Display for TokenKind {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Plus       => write!(f, "'+'"),
            Self::Minus      => write!(f, "'-'"),
            Self::Star       => write!(f, "'*'"),
            Self::Slash      => write!(f, "'/'"),
            Self::LParen     => write!(f, "'('"),
            Self::RParen     => write!(f, "')'"),
            Self::Integer    => write!(f, "integer"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Chunk of source code, encoded as a byte index and a byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub index: u32,
    pub size: u32,
}

impl Span {
    pub fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    #[inline]
    pub fn fragment<'a>(&self, text: &'a str) -> &'a str {
        &text[(self.index as usize)..(self.end() as usize)]
    }

    /// Ending index of the span, exclusive.
    #[inline]
    pub fn end(&self) -> u32 {
        self.index + self.size
    }

    /// The line of text containing the start of the span, without
    /// its line terminator, and the byte index where that line starts.
    #[inline]
    pub fn surrounding_line<'a>(&self, text: &'a str) -> (&'a str, usize) {
        line_around(text, self.index as usize)
    }
}

/// The line of text containing the byte index, and the byte index
/// where that line starts.
///
/// The index must lie on a character boundary.
pub(crate) fn line_around(text: &str, index: usize) -> (&str, usize) {
    let index = index.min(text.len());

    let start = text[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[index..]
        .find(|c: char| c == '\n' || c == '\r')
        .map(|i| index + i)
        .unwrap_or(text.len());

    (&text[start..end], start)
}
