//! Tokenizer
mod cursor;
mod lexer;
mod tokens;

pub use self::{
    lexer::{Lexer, LexerIter},
    tokens::{Span, Token, TokenKind},
};

pub(crate) use self::tokens::line_around;
