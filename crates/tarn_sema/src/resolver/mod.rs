//! Name Resolver
//!
//! 名称解析 Pass：收集定义、解析标识符引用，并记录哪些局部、导入和标签
//! 从未被使用。未使用的发现在这里只收集，不决定严重级别。

mod builtins;
pub mod decl;
pub mod expr;
pub mod labels;
pub mod stmt;

use crate::error::SemanticError;
use crate::scope::ScopeStack;
use crate::symbol::{FunctionSymbol, ImportSymbol};
use crate::unused::{UnusedEntity, UnusedKind};
use labels::LabelTable;
use std::collections::HashMap;
use tarn_syntax::ast::{Expr, Program, Stmt};

/// 名称解析器
pub struct Resolver {
    pub(crate) functions: HashMap<String, FunctionSymbol>,
    pub(crate) imports: Vec<ImportSymbol>,
    pub(crate) import_index: HashMap<String, usize>,
    /// 当前函数的局部作用域
    pub(crate) scopes: ScopeStack,
    /// 当前函数的标签
    pub(crate) labels: LabelTable,
    /// 外层循环栈，元素为循环的标签（如果有）
    pub(crate) loops: Vec<Option<String>>,
    pub(crate) errors: Vec<SemanticError>,
    pub(crate) unused: Vec<UnusedEntity>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        let mut resolver = Self {
            functions: HashMap::new(),
            imports: Vec::new(),
            import_index: HashMap::new(),
            scopes: ScopeStack::new(),
            labels: LabelTable::default(),
            loops: Vec::new(),
            errors: Vec::new(),
            unused: Vec::new(),
        };
        builtins::register_builtins(&mut resolver);
        resolver
    }

    /// 解析整个程序
    pub fn resolve(&mut self, program: &Program) {
        tracing::debug!(
            imports = program.imports.len(),
            functions = program.funcs.len(),
            "resolving program"
        );

        // Pass 1: 收集顶层声明
        for import in &program.imports {
            decl::collect_import(self, import);
        }
        for func in &program.funcs {
            decl::collect_function(self, func);
        }

        // Pass 2: 解析函数体
        for func in &program.funcs {
            decl::resolve_function(self, func);
        }

        let unused_imports: Vec<_> = self
            .imports
            .iter()
            .filter(|import| !import.used)
            .map(|import| UnusedEntity::new(UnusedKind::Import, &import.path, import.span.clone()))
            .collect();
        self.unused.extend(unused_imports);
    }

    /// 取出硬错误和未使用发现（均按源码位置排序）
    pub fn finish(self) -> (Vec<SemanticError>, Vec<UnusedEntity>) {
        let mut errors = self.errors;
        let mut unused = self.unused;
        errors.sort_by_key(|e| e.span().start);
        unused.sort_by_key(|e| e.span.start);
        (errors, unused)
    }

    // --- Delegation ---

    pub fn resolve_stmt(&mut self, stmt: &Stmt) {
        stmt::resolve_stmt(self, stmt);
    }

    pub fn resolve_expr(&mut self, expr: &Expr) {
        expr::resolve_expr(self, expr);
    }
}
