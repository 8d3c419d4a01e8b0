//! Recursive descent parser.
//!
//! ```text
//! expr   := term   (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := INTEGER | '(' expr ')'
//! ```
use std::fmt;

use crate::{
    error::{Diagnostic, StackResult},
    lex::{Lexer, Token, TokenKind},
};

use super::ast::{BinOp, Expr};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Single token of lookahead.
    current: Token,
}

impl<'a> Parser<'a> {
    /// Pulls the first token from the lexer.
    ///
    /// # Errors
    ///
    /// Returns the lexer's diagnostic if the first token is invalid.
    pub fn new(mut lexer: Lexer<'a>) -> StackResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    #[inline]
    pub fn from_source(source_code: &'a str) -> StackResult<Self> {
        Self::new(Lexer::new(source_code))
    }

    /// Parse one complete expression, which must span the whole source.
    pub fn parse(mut self) -> StackResult<Expr> {
        let node = self.expr()?;

        if self.current.kind != TokenKind::EndOfInput {
            return Err(self.error("extra characters after expression"));
        }

        Ok(node)
    }

    #[inline(never)]
    #[cold]
    fn error(&self, message: impl fmt::Display) -> Diagnostic {
        let found = match self.current.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            TokenKind::Integer => {
                let fragment = self.current.span.fragment(self.lexer.source_code());
                format!("integer `{fragment}`")
            }
            kind => kind.to_string(),
        };

        Diagnostic::syntactic(
            format!("{message}, found {found}"),
            Some(self.current.span.index as usize),
        )
    }

    /// Consume the lookahead token if it matches the given kind,
    /// and pull the next one from the lexer.
    ///
    /// The lookahead is left untouched when the kinds don't match.
    fn eat(&mut self, token_kind: TokenKind) -> StackResult<Token> {
        if self.current.kind != token_kind {
            return Err(self.error(format!("expected {token_kind}")));
        }

        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the lookahead if it is one of the given operators.
    fn match_operator(&mut self, operators: &[BinOp]) -> StackResult<Option<BinOp>> {
        match BinOp::from_token(self.current.kind) {
            Some(operator) if operators.contains(&operator) => {
                self.eat(operator.token_kind())?;
                Ok(Some(operator))
            }
            _ => Ok(None),
        }
    }
}

/// Grammar rules.
impl<'a> Parser<'a> {
    fn expr(&mut self) -> StackResult<Expr> {
        let mut node = self.term()?;

        // Fold to the left, so `a - b - c` becomes `(a - b) - c`.
        while let Some(operator) = self.match_operator(&[BinOp::Add, BinOp::Sub])? {
            let rhs = self.term()?;
            node = Expr::binary(node, operator, rhs);
        }

        Ok(node)
    }

    fn term(&mut self) -> StackResult<Expr> {
        let mut node = self.factor()?;

        while let Some(operator) = self.match_operator(&[BinOp::Mul, BinOp::Div])? {
            let rhs = self.factor()?;
            node = Expr::binary(node, operator, rhs);
        }

        Ok(node)
    }

    fn factor(&mut self) -> StackResult<Expr> {
        match self.current.kind {
            TokenKind::Integer => {
                let token = self.eat(TokenKind::Integer)?;
                match token.value {
                    Some(value) => Ok(Expr::Number(value)),
                    None => Err(Diagnostic::syntactic(
                        "integer token without a value",
                        Some(token.span.index as usize),
                    )),
                }
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let node = self.expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(self.error("expected a number or '('")),
        }
    }
}
