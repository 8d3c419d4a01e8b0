use super::ast::{BinaryExpr, Expr};

/// Traversal over the expression tree.
///
/// Implementors receive literals and binary nodes. The default
/// [`expr`](ExprVisitor::expr) dispatch matches exhaustively, so adding
/// a node type is a compile error until every visitor handles it.
pub trait ExprVisitor {
    type Output;

    fn number(&mut self, value: i64) -> Self::Output;
    fn binary(&mut self, expr: &BinaryExpr) -> Self::Output;

    #[inline]
    fn expr(&mut self, expr: &Expr) -> Self::Output {
        match expr {
            Expr::Number(value) => self.number(*value),
            Expr::Binary(expr) => self.binary(expr),
        }
    }
}

/// Renders a tree in nested constructor notation,
/// eg. `BinOp(Num(3), +, Num(5))`.
#[derive(Default)]
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = ();

    fn number(&mut self, value: i64) {
        self.out.push_str("Num(");
        self.out.push_str(&value.to_string());
        self.out.push(')');
    }

    fn binary(&mut self, expr: &BinaryExpr) {
        self.out.push_str("BinOp(");
        self.expr(&expr.lhs);
        self.out.push_str(", ");
        self.out.push(expr.operator.symbol());
        self.out.push_str(", ");
        self.expr(&expr.rhs);
        self.out.push(')');
    }
}
