//! Result and errors.
use std::fmt::{self, Display, Formatter, Write as FmtWrite};

use crate::lex::line_around;

pub type StackResult<T> = std::result::Result<T, Diagnostic>;

/// Compilation failure, reported by the stage that detected it.
///
/// The first diagnostic aborts the pipeline. There is no recovery
/// and no partial output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Byte offset into the source, when known.
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character that can't start a token.
    Lexical,
    /// Token sequence that violates the grammar.
    Syntactic,
}

impl Diagnostic {
    pub fn lexical(message: impl ToString, position: usize) -> Self {
        Self {
            kind: DiagnosticKind::Lexical,
            message: message.to_string(),
            position: Some(position),
        }
    }

    pub fn syntactic(message: impl ToString, position: Option<usize>) -> Self {
        Self {
            kind: DiagnosticKind::Syntactic,
            message: message.to_string(),
            position,
        }
    }

    #[inline]
    pub fn is_lexical(&self) -> bool {
        self.kind == DiagnosticKind::Lexical
    }

    #[inline]
    pub fn is_syntactic(&self) -> bool {
        self.kind == DiagnosticKind::Syntactic
    }

    /// One-based line and column of the diagnostic position.
    ///
    /// Columns count characters, not bytes.
    pub fn line_column(&self, source: &str) -> Option<(usize, usize)> {
        let position = floor_char_boundary(source, self.position?);
        let (_, line_start) = line_around(source, position);

        let line = source[..line_start].matches('\n').count() + 1;
        let column = source[line_start..position].chars().count() + 1;

        Some((line, column))
    }

    /// Format the diagnostic for humans, pointing at the offending
    /// character in the source with a caret.
    ///
    /// ```text
    /// [line 1, column 6] unknown character '#'
    /// 10 + #
    ///      ^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();

        match (self.position, self.line_column(source)) {
            (Some(position), Some((line, column))) => {
                let position = floor_char_boundary(source, position);
                let (text, _) = line_around(source, position);

                // Writing to a string can't fail.
                let _ = writeln!(out, "[line {line}, column {column}] {}", self.message);
                let _ = writeln!(out, "{text}");
                let _ = write!(out, "{}^", " ".repeat(column - 1));
            }
            _ => out.push_str(&self.message),
        }

        out
    }
}

/// Clamp a byte position into the source, backing off
/// to the start of the character it lands in.
fn floor_char_boundary(source: &str, position: usize) -> usize {
    let mut position = position.min(source.len());
    while !source.is_char_boundary(position) {
        position -= 1;
    }
    position
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical error"),
            Self::Syntactic => write!(f, "syntax error"),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => {
                write!(f, "{} at offset {}: {}", self.kind, position, self.message)
            }
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let err = Diagnostic::lexical("unknown character '#'", 5);
        assert_eq!(err.to_string(), "lexical error at offset 5: unknown character '#'");

        let err = Diagnostic::syntactic("expected ')'", None);
        assert_eq!(err.to_string(), "syntax error: expected ')'");
    }

    #[test]
    fn test_line_column() {
        const CODE: &str = "1 +\n  2 * #";

        let err = Diagnostic::lexical("unknown character '#'", 10);
        assert_eq!(err.line_column(CODE), Some((2, 7)));

        let err = Diagnostic::syntactic("no position", None);
        assert_eq!(err.line_column(CODE), None);
    }

    #[test]
    fn test_line_column_multibyte() {
        // 'é' is two bytes wide, the column counts it once.
        const CODE: &str = "é#";
        let err = Diagnostic::lexical("unknown character '#'", 2);
        assert_eq!(err.line_column(CODE), Some((1, 2)));
    }

    #[test]
    fn test_render_caret() {
        const CODE: &str = "10 + #";
        let err = Diagnostic::lexical("unknown character '#'", 5);
        assert_eq!(
            err.render(CODE),
            "[line 1, column 6] unknown character '#'\n10 + #\n     ^"
        );
    }

    #[test]
    fn test_render_second_line() {
        const CODE: &str = "1 +\n2 +";
        let err = Diagnostic::syntactic("expected a number or '('", Some(7));
        assert_eq!(
            err.render(CODE),
            "[line 2, column 4] expected a number or '('\n2 +\n   ^"
        );
    }

    #[test]
    fn test_render_without_position() {
        let err = Diagnostic::syntactic("bad", None);
        assert_eq!(err.render("1"), "bad");
    }
}
