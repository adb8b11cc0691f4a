//! Symbol Definitions
//!
//! 文件级符号：函数、导入，以及函数级的标签

use tarn_syntax::ast::Span;

/// 函数符号
#[derive(Debug, Clone)]
pub struct FunctionSymbol {
    pub name: String,
    /// 参数个数；`None` 表示可变参数（仅内建函数）
    pub arity: Option<usize>,
    pub span: Span,
    pub builtin: bool,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>, arity: usize, span: Span) -> Self {
        Self {
            name: name.into(),
            arity: Some(arity),
            span,
            builtin: false,
        }
    }

    pub fn builtin(name: impl Into<String>, arity: Option<usize>) -> Self {
        Self {
            name: name.into(),
            arity,
            span: 0..0,
            builtin: true,
        }
    }
}

/// 导入符号
#[derive(Debug, Clone)]
pub struct ImportSymbol {
    /// 完整导入路径，用于诊断信息
    pub path: String,
    /// 文件内绑定的名字
    pub name: String,
    pub span: Span,
    pub used: bool,
}

/// 标签符号（函数作用域）
#[derive(Debug, Clone)]
pub struct LabelSymbol {
    pub name: String,
    pub span: Span,
    pub used: bool,
}
