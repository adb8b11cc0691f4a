pub use tarn_diagnostics::Span;

/// 带位置的标识符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// 空白标识符 `_` 不参与未使用检查
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 字面量: 1, "hello", true
    Literal(Literal),

    // 变量使用: x, count
    Variable(String),

    // 二元操作: a + b, a == b
    Binary(Box<Expr>, BinaryOp, Box<Expr>),

    // 一元操作: -a, !b
    Unary(UnaryOp, Box<Expr>),

    // 函数调用: add(1, 2)
    Call { callee: Ident, args: Vec<Expr> },

    // 包限定调用: fmt.println(x)
    QualifiedCall {
        package: Ident,
        callee: Ident,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    String(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Neq,
    Lt,
    Gt,
    Leq,
    Geq,
    And,
    Or,
}

impl BinaryOp {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Eq => "eq",
            Self::Neq => "ne",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Leq => "le",
            Self::Geq => "ge",
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Not => "not",
        }
    }
}
