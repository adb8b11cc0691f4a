//! Label Table
//!
//! 标签在整个函数体内可见（goto 可以向前跳），所以先收集再解析。

use crate::error::SemanticError;
use crate::symbol::LabelSymbol;
use std::collections::HashMap;
use tarn_syntax::ast::Stmt;

#[derive(Debug, Default)]
pub struct LabelTable {
    labels: HashMap<String, LabelSymbol>,
}

impl LabelTable {
    /// 收集函数体内的所有标签，重复定义写入 `errors`
    pub fn collect(body: &[Stmt], errors: &mut Vec<SemanticError>) -> Self {
        let mut table = Self::default();
        for stmt in body {
            table.collect_stmt(stmt, errors);
        }
        table
    }

    fn collect_stmt(&mut self, stmt: &Stmt, errors: &mut Vec<SemanticError>) {
        match stmt {
            Stmt::Labeled { label, body, .. } => {
                if let Some(prev) = self.labels.get(&label.name) {
                    errors.push(SemanticError::DuplicateDefinition {
                        name: label.name.clone(),
                        span: label.span.clone(),
                        previous_span: prev.span.clone(),
                    });
                } else {
                    self.labels.insert(
                        label.name.clone(),
                        LabelSymbol {
                            name: label.name.clone(),
                            span: label.span.clone(),
                            used: false,
                        },
                    );
                }
                self.collect_stmt(body, errors);
            }
            Stmt::Block(stmts) => {
                for stmt in stmts {
                    self.collect_stmt(stmt, errors);
                }
            }
            Stmt::If {
                then_block,
                else_block,
                ..
            } => {
                for stmt in then_block.iter().chain(else_block.iter().flatten()) {
                    self.collect_stmt(stmt, errors);
                }
            }
            Stmt::While { body, .. } => {
                for stmt in body {
                    self.collect_stmt(stmt, errors);
                }
            }
            _ => {}
        }
    }

    /// 标记标签被引用；标签不存在时返回 false
    pub fn mark_used(&mut self, name: &str) -> bool {
        match self.labels.get_mut(name) {
            Some(label) => {
                label.used = true;
                true
            }
            None => false,
        }
    }

    /// 未被引用的标签
    pub fn unused(&self) -> impl Iterator<Item = &LabelSymbol> {
        self.labels.values().filter(|label| !label.used)
    }
}
