use super::labels::LabelTable;
use super::Resolver;
use crate::error::SemanticError;
use crate::scope::{Local, LocalKind, ScopeStack};
use crate::symbol::{FunctionSymbol, ImportSymbol};
use crate::unused::{UnusedEntity, UnusedKind};
use tarn_syntax::ast::{Function, Import};

/// Pass 1: 收集导入
///
/// 空白导入 `import "x" as _;` 不绑定名字，也不参与未使用检查。
pub fn collect_import(resolver: &mut Resolver, import: &Import) {
    let name = import.name().to_string();
    if name == "_" {
        return;
    }

    if let Some(&prev) = resolver.import_index.get(&name) {
        resolver.errors.push(SemanticError::DuplicateDefinition {
            name,
            span: import.span.clone(),
            previous_span: resolver.imports[prev].span.clone(),
        });
        return;
    }

    resolver.import_index.insert(name.clone(), resolver.imports.len());
    resolver.imports.push(ImportSymbol {
        path: import.path.clone(),
        name,
        span: import.span.clone(),
        used: false,
    });
}

/// Pass 1: 收集函数签名（允许先调用后定义）
pub fn collect_function(resolver: &mut Resolver, func: &Function) {
    let name = &func.name.name;

    if let Some(prev) = resolver.functions.get(name) {
        if !prev.builtin {
            resolver.errors.push(SemanticError::DuplicateDefinition {
                name: name.clone(),
                span: func.name.span.clone(),
                previous_span: prev.span.clone(),
            });
            return;
        }
    }

    resolver.functions.insert(
        name.clone(),
        FunctionSymbol::new(name.clone(), func.params.len(), func.name.span.clone()),
    );
}

/// Pass 2: 解析函数体并收集未使用的局部变量和标签
pub fn resolve_function(resolver: &mut Resolver, func: &Function) {
    resolver.scopes = ScopeStack::new();
    resolver.loops.clear();
    resolver.labels = LabelTable::collect(&func.body, &mut resolver.errors);

    for param in &func.params {
        let local = Local::new(param.name.clone(), param.span.clone(), LocalKind::Param);
        if let Err(e) = resolver.scopes.define(local) {
            resolver.errors.push(e);
        }
    }

    // 函数体顶层与参数共享函数作用域
    for stmt in &func.body {
        resolver.resolve_stmt(stmt);
    }

    let unused_vars: Vec<_> = resolver
        .scopes
        .locals()
        .iter()
        .filter(|local| local.is_unused_var())
        .map(|local| UnusedEntity::new(UnusedKind::Variable, &local.name, local.span.clone()))
        .collect();
    resolver.unused.extend(unused_vars);

    let unused_labels: Vec<_> = resolver
        .labels
        .unused()
        .map(|label| UnusedEntity::new(UnusedKind::Label, &label.name, label.span.clone()))
        .collect();
    resolver.unused.extend(unused_labels);
}
