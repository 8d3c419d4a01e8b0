//! Code generation
mod instr;

pub use self::instr::{Instruction, OpCode};

use crate::parse::{BinaryExpr, Expr, ExprVisitor};

/// Code generator.
///
/// Walks the tree in post-order, so both operands are
/// on the stack before their operator is emitted. Each
/// sub-tree's code leaves exactly one value behind.
#[derive(Default)]
pub struct CodeGen {
    /// Resulting generated code.
    code: Vec<Instruction>,
}

impl CodeGen {
    #[inline]
    pub fn new() -> Self {
        Self { code: vec![] }
    }

    pub fn generate(mut self, expr: &Expr) -> Vec<Instruction> {
        self.expr(expr);
        self.code
    }

    #[inline]
    fn emit(&mut self, instr: Instruction) {
        self.code.push(instr)
    }
}

impl ExprVisitor for CodeGen {
    type Output = ();

    fn number(&mut self, value: i64) {
        self.emit(Instruction::Push(value));
    }

    fn binary(&mut self, expr: &BinaryExpr) {
        self.expr(&expr.lhs);
        self.expr(&expr.rhs);
        self.emit(Instruction::Op(expr.operator.into()));
    }
}
