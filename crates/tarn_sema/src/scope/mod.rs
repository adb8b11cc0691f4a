//! Scope Management
//!
//! 函数内的局部作用域。采用栈式作用域设计，支持块级作用域，
//! 并记录每个局部是否被读取过。

use std::collections::HashMap;
use tarn_syntax::ast::Span;

pub mod stack;
pub use stack::ScopeStack;

/// 作用域 ID
pub type ScopeId = usize;

/// 局部 ID
pub type LocalId = usize;

/// 局部种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalKind {
    Param,
    Var,
}

/// 局部变量或参数
#[derive(Debug, Clone)]
pub struct Local {
    pub name: String,
    pub span: Span,
    pub kind: LocalKind,
    /// 是否被读取过
    pub used: bool,
}

impl Local {
    pub fn new(name: impl Into<String>, span: Span, kind: LocalKind) -> Self {
        Self {
            name: name.into(),
            span,
            kind,
            used: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }

    /// 是否应报告为未使用
    pub fn is_unused_var(&self) -> bool {
        self.kind == LocalKind::Var && !self.used && !self.is_blank()
    }
}

/// 单个作用域
///
/// 根作用域是函数作用域，参数与函数体顶层语句共享；
/// 其余都是块作用域 (if, while, {} 等)。
#[derive(Debug, Clone)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    symbols: HashMap<String, LocalId>,
}

impl Scope {
    pub fn new(parent: Option<ScopeId>) -> Self {
        Self {
            parent,
            symbols: HashMap::new(),
        }
    }

    /// 在当前作用域定义符号
    pub fn define(&mut self, name: String, local_id: LocalId) {
        self.symbols.insert(name, local_id);
    }

    /// 在当前作用域查找符号（不向上查找）
    pub fn lookup_local(&self, name: &str) -> Option<LocalId> {
        self.symbols.get(name).copied()
    }
}
