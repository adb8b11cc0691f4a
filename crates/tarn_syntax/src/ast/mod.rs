pub mod expr;
pub mod stmt;

// 重新导出核心类型，方便外部直接使用 tarn_syntax::ast::Expr 等
pub use expr::{BinaryOp, Expr, ExprKind, Ident, Literal, Span, UnaryOp};
pub use stmt::{Function, Import, Stmt};

// 一个源文件：先是导入，然后是函数定义
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub imports: Vec<Import>,
    pub funcs: Vec<Function>,
}
