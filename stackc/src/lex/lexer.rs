//! Lexical analysis
use log::trace;

use crate::error::{Diagnostic, StackResult};

use super::{
    cursor::{Cursor, EOF_CHAR},
    tokens::{Span, Token, TokenKind},
};

pub struct Lexer<'a> {
    /// Character scanner
    cursor: Cursor<'a>,
    /// Keep reference to the source so the parser can
    /// slice fragments from it.
    original: &'a str,
    /// Start absolute byte position of the current token
    /// in the source.
    start_pos: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source_code: &'a str) -> Self {
        let mut cursor = Cursor::new(source_code);

        // Initial state of the cursor is a non-existant EOF char,
        // but the initial state of the lexer should be a valid
        // token starting character.
        //
        // Prime the cursor for the first iteration.
        cursor.next();

        let start_pos = cursor.offset();

        Self {
            cursor,
            original: source_code,
            start_pos,
        }
    }

    /// Original source code that was passed in during construction.
    pub fn source_code(&self) -> &'a str {
        self.original
    }

    /// Scan the source characters and construct the next token.
    ///
    /// Once the source is exhausted every call returns a
    /// [`TokenKind::EndOfInput`] token.
    ///
    /// ## Implementation
    ///
    /// Each iteration starts with the assumption that the internal cursor
    /// is pointing to the start of the remaining source to be consumed.
    /// When an iteration is done building a token, it must leave the cursor
    /// at the start of the next token's text.
    ///
    /// # Errors
    ///
    /// Returns a lexical [`Diagnostic`] when the character under the cursor
    /// can't start a token. The character is not consumed, so subsequent
    /// calls report the same error.
    ///
    /// Spans hold 32-bit offsets, so a source longer than [`u32::MAX`]
    /// bytes is rejected at offset 0 before any token is scanned.
    pub fn next_token(&mut self) -> StackResult<Token> {
        use TokenKind as TK;

        if exceeds_span_range(self.original.len()) {
            return Err(Diagnostic::lexical(
                format!("source too large: {} bytes", self.original.len()),
                0,
            ));
        }

        // Erase leading whitespace.
        while is_whitespace(self.cursor.current()) {
            self.cursor.next();
        }

        self.start_token();

        let token = match self.cursor.current() {
            '+' => self.make_token(TK::Plus),
            '-' => self.make_token(TK::Minus),
            '*' => self.make_token(TK::Star),
            '/' => self.make_token(TK::Slash),
            '(' => self.make_token(TK::LParen),
            ')' => self.make_token(TK::RParen),
            '0'..='9' => self.consume_integer()?,
            EOF_CHAR if self.cursor.at_end() => self.make_token(TK::EndOfInput),
            c => {
                return Err(Diagnostic::lexical(
                    format!("unknown character {c:?}"),
                    self.start_pos as usize,
                ))
            }
        };

        trace!("{:?} {}:{}", token.kind, token.span.index, token.span.size);

        Ok(token)
    }

    /// Create a span using the starting position of the current token,
    /// and the current offset of the cursor.
    fn make_span(&self) -> Span {
        let start = self.start_pos;
        let end = self.cursor.peek_offset();

        // End-of-input has 0 size.
        debug_assert!(end >= start);
        let size = end - start;

        Span { index: start, size }
    }

    fn fragment(&self) -> &'a str {
        self.make_span().fragment(self.original)
    }

    /// Primes the lexer to consume the next token.
    fn start_token(&mut self) {
        self.start_pos = self.cursor.offset();
    }

    /// Build a token, using the source text from the position
    /// stored by [`start_token`](struct.Lexer.html#fn-start_token) to the
    /// current cursor position.
    ///
    /// Also prepare the cursor for the next iteration.
    fn make_token(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.make_span());

        // Position the cursor to the starting character for the
        // next token.
        self.cursor.next();
        debug_assert_eq!(self.cursor.offset(), token.span.end());

        token
    }

    /// Make an integer literal token from the maximal run of digits.
    ///
    /// There is no sign. A leading minus is always its own token.
    fn consume_integer(&mut self) -> StackResult<Token> {
        debug_assert!(is_digit(self.cursor.current()));

        while is_digit(self.cursor.peek()) {
            self.cursor.next();
        }

        let value = self.fragment().parse::<i64>().map_err(|_| {
            Diagnostic::lexical(
                format!("integer literal too large: {}", self.fragment()),
                self.start_pos as usize,
            )
        })?;

        let mut token = self.make_token(TokenKind::Integer);
        token.value = Some(value);
        Ok(token)
    }
}

/// Byte offsets past this length can't be represented in a [`Span`].
#[inline]
fn exceeds_span_range(len: usize) -> bool {
    len > u32::MAX as usize
}

/// Test whether the character is considered whitespace
/// that should be ignored by the parser.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[allow(clippy::manual_is_ascii_check)] // consistency with other functions
fn is_digit(c: char) -> bool {
    matches!(c, '0'..='9')
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = StackResult<Token>;
    type IntoIter = LexerIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        LexerIter {
            lexer: self,
            done: false,
        }
    }
}

/// Convenience iterator that wraps the lexer.
///
/// Yields the end-of-input token exactly once, or stops
/// after the first error.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LexerIter<'a> {
    // Track end so an EndOfInput token is emitted once.
    done: bool,
    lexer: Lexer<'a>,
}

impl<'a> Iterator for LexerIter<'a> {
    type Item = StackResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.lexer.next_token();
        match &result {
            Ok(token) if token.kind == TokenKind::EndOfInput => self.done = true,
            Err(_) => self.done = true,
            Ok(_) => {}
        }

        Some(result)
    }
}
