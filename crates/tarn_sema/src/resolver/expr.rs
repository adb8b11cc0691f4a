use super::Resolver;
use crate::error::SemanticError;
use tarn_syntax::ast::{Expr, ExprKind};

pub fn resolve_expr(resolver: &mut Resolver, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::Variable(name) => match resolver.scopes.lookup(name) {
            Some(id) => resolver.scopes.mark_used(id),
            None => resolver.errors.push(SemanticError::UndefinedVariable {
                name: name.clone(),
                span: expr.span.clone(),
            }),
        },
        ExprKind::Binary(left, _, right) => {
            resolver.resolve_expr(left);
            resolver.resolve_expr(right);
        }
        ExprKind::Unary(_, operand) => {
            resolver.resolve_expr(operand);
        }
        ExprKind::Call { callee, args } => {
            for arg in args {
                resolver.resolve_expr(arg);
            }

            match resolver.functions.get(&callee.name) {
                Some(func) => {
                    if let Some(expected) = func.arity {
                        if expected != args.len() {
                            resolver.errors.push(SemanticError::ArgumentCountMismatch {
                                name: callee.name.clone(),
                                expected,
                                found: args.len(),
                                span: expr.span.clone(),
                            });
                        }
                    }
                }
                None => resolver.errors.push(SemanticError::UndefinedFunction {
                    name: callee.name.clone(),
                    span: callee.span.clone(),
                }),
            }
        }
        ExprKind::QualifiedCall {
            package, args, ..
        } => {
            // 包成员的签名不可见，只检查包本身
            match resolver.import_index.get(&package.name) {
                Some(&idx) => resolver.imports[idx].used = true,
                None => resolver.errors.push(SemanticError::UndefinedPackage {
                    name: package.name.clone(),
                    span: package.span.clone(),
                }),
            }
            for arg in args {
                resolver.resolve_expr(arg);
            }
        }
    }
}
