//! Syntactic analysis
mod ast;
mod parser;
mod visitor;

pub use self::{
    ast::{BinOp, BinaryExpr, Expr},
    parser::Parser,
    visitor::{AstPrinter, ExprVisitor},
};
