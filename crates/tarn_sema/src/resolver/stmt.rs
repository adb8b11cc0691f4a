use super::Resolver;
use crate::error::SemanticError;
use crate::scope::{Local, LocalKind};
use tarn_syntax::ast::{Expr, Ident, Span, Stmt};

pub fn resolve_stmt(resolver: &mut Resolver, stmt: &Stmt) {
    match stmt {
        Stmt::VarDecl { name, value, .. } => {
            // 先解析初始化表达式（变量在自己的初始化器中不可见）
            resolver.resolve_expr(value);

            let local = Local::new(name.name.clone(), name.span.clone(), LocalKind::Var);
            if let Err(e) = resolver.scopes.define(local) {
                resolver.errors.push(e);
            }
        }
        Stmt::Assign { target, value, .. } => {
            // 赋值目标只需存在，不算使用
            if resolver.scopes.lookup(&target.name).is_none() {
                resolver.errors.push(SemanticError::UndefinedVariable {
                    name: target.name.clone(),
                    span: target.span.clone(),
                });
            }
            resolver.resolve_expr(value);
        }
        Stmt::Expression(expr) => {
            resolver.resolve_expr(expr);
        }
        Stmt::Block(stmts) => {
            resolve_block(resolver, stmts);
        }
        Stmt::If {
            condition,
            then_block,
            else_block,
            ..
        } => {
            resolver.resolve_expr(condition);
            resolve_block(resolver, then_block);
            if let Some(else_stmts) = else_block {
                resolve_block(resolver, else_stmts);
            }
        }
        Stmt::While {
            condition, body, ..
        } => {
            resolve_loop(resolver, condition, body, None);
        }
        Stmt::Labeled { label, body, .. } => match body.as_ref() {
            Stmt::While {
                condition, body, ..
            } => resolve_loop(resolver, condition, body, Some(label.name.as_str())),
            other => resolver.resolve_stmt(other),
        },
        Stmt::Break { label, span } => {
            resolve_branch(resolver, "break", label.as_ref(), span);
        }
        Stmt::Continue { label, span } => {
            resolve_branch(resolver, "continue", label.as_ref(), span);
        }
        Stmt::Goto { label, .. } => {
            if !resolver.labels.mark_used(&label.name) {
                resolver.errors.push(SemanticError::UndefinedLabel {
                    name: label.name.clone(),
                    span: label.span.clone(),
                });
            }
        }
        Stmt::Return { value, .. } => {
            if let Some(value) = value {
                resolver.resolve_expr(value);
            }
        }
    }
}

fn resolve_block(resolver: &mut Resolver, stmts: &[Stmt]) {
    resolver.scopes.enter_scope();
    for stmt in stmts {
        resolver.resolve_stmt(stmt);
    }
    resolver.scopes.exit_scope();
}

fn resolve_loop(resolver: &mut Resolver, condition: &Expr, body: &[Stmt], label: Option<&str>) {
    resolver.resolve_expr(condition);
    resolver.loops.push(label.map(str::to_string));
    resolve_block(resolver, body);
    resolver.loops.pop();
}

/// break / continue
fn resolve_branch(
    resolver: &mut Resolver,
    keyword: &'static str,
    label: Option<&Ident>,
    span: &Span,
) {
    let Some(label) = label else {
        if resolver.loops.is_empty() {
            let err = match keyword {
                "break" => SemanticError::BreakOutsideLoop { span: span.clone() },
                _ => SemanticError::ContinueOutsideLoop { span: span.clone() },
            };
            resolver.errors.push(err);
        }
        return;
    };

    if !resolver.labels.mark_used(&label.name) {
        resolver.errors.push(SemanticError::UndefinedLabel {
            name: label.name.clone(),
            span: label.span.clone(),
        });
        return;
    }

    let encloses = resolver
        .loops
        .iter()
        .any(|l| l.as_deref() == Some(label.name.as_str()));
    if !encloses {
        resolver.errors.push(SemanticError::InvalidBranchLabel {
            keyword,
            name: label.name.clone(),
            span: label.span.clone(),
        });
    }
}
