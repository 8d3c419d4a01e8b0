//! Compiler from integer arithmetic expressions to stack machine code.
//!
//! ```
//! let code = stackc::compile_str("10 + 2 * 3").unwrap();
//! let listing = code.iter().map(|instr| instr.to_string()).collect::<Vec<_>>();
//! assert_eq!(listing, ["PUSH 10", "PUSH 2", "PUSH 3", "MUL", "ADD"]);
//! ```
pub mod codegen;
mod error;
pub mod lex;
pub mod parse;

use log::debug;

pub use self::error::{Diagnostic, DiagnosticKind, StackResult};

use self::{codegen::CodeGen, codegen::Instruction, lex::Lexer, parse::Parser};

pub const IMPL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the whole pipeline over one source string.
///
/// # Errors
///
/// Returns the first lexical or syntactic [`Diagnostic`]. No
/// partial code is produced.
pub fn compile_str(source_code: &str) -> StackResult<Vec<Instruction>> {
    // Lexical and syntactic analysis
    let lexer = Lexer::new(source_code);
    let tree = Parser::new(lexer)?.parse()?;
    debug!("parsed expression tree");

    // Code generation
    let code = CodeGen::new().generate(&tree);
    debug!("generated {} instructions", code.len());

    Ok(code)
}

pub mod prelude {
    pub use super::{
        codegen::{CodeGen, Instruction, OpCode},
        compile_str,
        error::{Diagnostic, DiagnosticKind, StackResult},
        lex::{Lexer, Span, Token, TokenKind},
        parse::{AstPrinter, BinOp, Expr, ExprVisitor, Parser},
    };
}
