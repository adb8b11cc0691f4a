//! Unused Entities
//!
//! "声明但未使用"的发现，以及按照 [`SeverityPolicy`] 把它们分流为错误或警告。
//! 每个发现只查询一次策略。

use crate::error::{SemanticError, SemanticWarning};
use std::fmt;
use tarn_diagnostics::SeverityPolicy;
use tarn_syntax::ast::Span;

/// 未使用实体的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnusedKind {
    /// 局部变量（赋值不算使用，参数不检查）
    Variable,
    /// 导入
    Import,
    /// 标签
    Label,
}

/// 一个未使用实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedEntity {
    pub kind: UnusedKind,
    /// 变量名、导入路径或标签名
    pub name: String,
    pub span: Span,
}

impl UnusedEntity {
    pub fn new(kind: UnusedKind, name: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for UnusedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnusedKind::Variable => write!(f, "declared and not used: {}", self.name),
            UnusedKind::Import => write!(f, "\"{}\" imported and not used", self.name),
            UnusedKind::Label => write!(f, "label {} defined and not used", self.name),
        }
    }
}

/// 分流结果
#[derive(Debug, Clone, PartialEq)]
pub enum Routed {
    Error(SemanticError),
    Warning(SemanticWarning),
}

/// 根据策略决定一个未使用实体走错误路径还是警告路径
pub fn route(entity: UnusedEntity, policy: SeverityPolicy) -> Routed {
    let level = policy.unused_level();
    tracing::trace!(kind = ?entity.kind, name = %entity.name, %level, "unused entity");

    if level.is_error() {
        Routed::Error(SemanticError::Unused(entity))
    } else {
        Routed::Warning(SemanticWarning::Unused(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            UnusedEntity::new(UnusedKind::Variable, "x", 0..1).to_string(),
            "declared and not used: x"
        );
        assert_eq!(
            UnusedEntity::new(UnusedKind::Import, "os/path", 0..1).to_string(),
            "\"os/path\" imported and not used"
        );
        assert_eq!(
            UnusedEntity::new(UnusedKind::Label, "outer", 0..1).to_string(),
            "label outer defined and not used"
        );
    }

    #[test]
    fn test_route_follows_policy() {
        let entity = UnusedEntity::new(UnusedKind::Variable, "x", 4..5);

        assert!(matches!(
            route(entity.clone(), SeverityPolicy::warn()),
            Routed::Warning(SemanticWarning::Unused(ref e)) if e == &entity
        ));
        assert!(matches!(
            route(entity.clone(), SeverityPolicy::deny()),
            Routed::Error(SemanticError::Unused(ref e)) if e == &entity
        ));
    }
}
