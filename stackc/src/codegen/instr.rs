use std::fmt;

use crate::parse::BinOp;

/// Stack machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `PUSH n`
    /// Push the value onto the stack.
    Push(i64),
    /// `ADD`, `SUB`, `MUL`, `DIV`
    /// Pop `b`, then `a`, and push `a OP b`.
    Op(OpCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    Add,
    Sub,
    Mul,
    Div,
}

impl From<BinOp> for OpCode {
    #[inline]
    fn from(operator: BinOp) -> Self {
        match operator {
            BinOp::Add => OpCode::Add,
            BinOp::Sub => OpCode::Sub,
            BinOp::Mul => OpCode::Mul,
            BinOp::Div => OpCode::Div,
        }
    }
}

impl fmt::Display for OpCode {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpCode::Add => write!(f, "ADD"),
            OpCode::Sub => write!(f, "SUB"),
            OpCode::Mul => write!(f, "MUL"),
            OpCode::Div => write!(f, "DIV"),
        }
    }
}

/// Outputs instruction as stack machine assembly.
impl fmt::Display for Instruction {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "PUSH {}", value),
            Instruction::Op(code)    => write!(f, "{}", code),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Instruction::Push(42).to_string(), "PUSH 42");
        assert_eq!(Instruction::Op(OpCode::Add).to_string(), "ADD");
        assert_eq!(Instruction::Op(OpCode::Sub).to_string(), "SUB");
        assert_eq!(Instruction::Op(OpCode::Mul).to_string(), "MUL");
        assert_eq!(Instruction::Op(OpCode::Div).to_string(), "DIV");
    }
}
