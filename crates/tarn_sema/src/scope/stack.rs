use super::{Local, LocalId, Scope, ScopeId};
use crate::error::SemanticError;

/// 作用域栈 - 管理一个函数内的嵌套作用域
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
    current: ScopeId,
    // 按声明顺序存储所有局部
    locals: Vec<Local>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// 创建新的作用域栈，初始化函数作用域
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new(None)],
            current: 0,
            locals: Vec::new(),
        }
    }

    /// 进入新的块作用域
    pub fn enter_scope(&mut self) {
        self.scopes.push(Scope::new(Some(self.current)));
        self.current = self.scopes.len() - 1;
    }

    /// 退出当前作用域，返回到父作用域
    pub fn exit_scope(&mut self) {
        if let Some(parent) = self.scopes[self.current].parent {
            self.current = parent;
        }
    }

    /// 在当前作用域定义局部
    ///
    /// 空白标识符 `_` 不进入符号表，可以重复定义，也无法被引用。
    pub fn define(&mut self, local: Local) -> Result<LocalId, SemanticError> {
        if !local.is_blank() {
            if let Some(prev_id) = self.scopes[self.current].lookup_local(&local.name) {
                return Err(SemanticError::DuplicateDefinition {
                    name: local.name,
                    span: local.span,
                    previous_span: self.locals[prev_id].span.clone(),
                });
            }
        }

        let id = self.locals.len();
        if !local.is_blank() {
            self.scopes[self.current].define(local.name.clone(), id);
        }
        self.locals.push(local);
        Ok(id)
    }

    /// 查找局部（从当前作用域向上查找）
    pub fn lookup(&self, name: &str) -> Option<LocalId> {
        let mut scope_id = Some(self.current);
        while let Some(id) = scope_id {
            let scope = &self.scopes[id];
            if let Some(local) = scope.lookup_local(name) {
                return Some(local);
            }
            scope_id = scope.parent;
        }
        None
    }

    /// 标记局部已被读取
    pub fn mark_used(&mut self, id: LocalId) {
        if let Some(local) = self.locals.get_mut(id) {
            local.used = true;
        }
    }

    /// 所有局部（按声明顺序）
    pub fn locals(&self) -> &[Local] {
        &self.locals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::LocalKind;

    #[test]
    fn test_shadowing_in_nested_scope() {
        let mut scopes = ScopeStack::new();
        let outer = scopes
            .define(Local::new("x", 0..1, LocalKind::Var))
            .unwrap();

        scopes.enter_scope();
        let inner = scopes
            .define(Local::new("x", 5..6, LocalKind::Var))
            .unwrap();
        assert_eq!(scopes.lookup("x"), Some(inner));
        scopes.exit_scope();

        assert_eq!(scopes.lookup("x"), Some(outer));
        // 根作用域不会被退出
        scopes.exit_scope();
        assert_eq!(scopes.lookup("x"), Some(outer));
    }

    #[test]
    fn test_duplicate_in_same_scope() {
        let mut scopes = ScopeStack::new();
        scopes
            .define(Local::new("x", 0..1, LocalKind::Param))
            .unwrap();

        let err = scopes
            .define(Local::new("x", 10..11, LocalKind::Var))
            .unwrap_err();
        assert!(matches!(
            err,
            SemanticError::DuplicateDefinition { ref name, ref previous_span, .. }
                if name == "x" && previous_span == &(0..1)
        ));
    }

    #[test]
    fn test_blank_is_never_visible() {
        let mut scopes = ScopeStack::new();
        scopes.define(Local::new("_", 0..1, LocalKind::Var)).unwrap();
        scopes.define(Local::new("_", 2..3, LocalKind::Var)).unwrap();

        assert_eq!(scopes.lookup("_"), None);
        assert!(scopes.locals().iter().all(|l| !l.is_unused_var()));
    }

    #[test]
    fn test_mark_used() {
        let mut scopes = ScopeStack::new();
        let id = scopes.define(Local::new("x", 0..1, LocalKind::Var)).unwrap();
        assert!(scopes.locals()[id].is_unused_var());

        scopes.mark_used(id);
        assert!(!scopes.locals()[id].is_unused_var());
    }
}
