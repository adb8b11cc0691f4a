//! Semantic Analysis Error Types
//!
//! 语义错误总是致命的；未使用实体根据策略成为 [`SemanticError::Unused`]
//! 或 [`SemanticWarning::Unused`]。

use crate::unused::UnusedEntity;
use tarn_diagnostics::Diagnostic;
use tarn_syntax::ast::Span;
use thiserror::Error;

/// 语义分析错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    // ============ 名称解析错误 ============
    /// 未定义的变量
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String, span: Span },

    /// 未定义的函数
    #[error("undefined function '{name}'")]
    UndefinedFunction { name: String, span: Span },

    /// 限定调用的包没有导入
    #[error("undefined package '{name}'")]
    UndefinedPackage { name: String, span: Span },

    /// 重复定义
    #[error("'{name}' is already defined in this scope")]
    DuplicateDefinition {
        name: String,
        span: Span,
        previous_span: Span,
    },

    /// 参数数量不匹配
    #[error("function '{name}' expects {expected} arguments, but got {found}")]
    ArgumentCountMismatch {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    // ============ 标签与跳转 ============
    /// 未定义的标签
    #[error("undefined label '{name}'")]
    UndefinedLabel { name: String, span: Span },

    /// break/continue 的标签不是外层循环
    #[error("invalid {keyword} label '{name}': not an enclosing loop")]
    InvalidBranchLabel {
        keyword: &'static str,
        name: String,
        span: Span,
    },

    /// break 语句不在循环内
    #[error("'break' outside loop")]
    BreakOutsideLoop { span: Span },

    /// continue 语句不在循环内
    #[error("'continue' outside loop")]
    ContinueOutsideLoop { span: Span },

    // ============ 未使用实体（策略为致命时） ============
    #[error("{0}")]
    Unused(UnusedEntity),
}

impl SemanticError {
    /// 获取错误发生的位置
    pub fn span(&self) -> &Span {
        match self {
            Self::UndefinedVariable { span, .. } => span,
            Self::UndefinedFunction { span, .. } => span,
            Self::UndefinedPackage { span, .. } => span,
            Self::DuplicateDefinition { span, .. } => span,
            Self::ArgumentCountMismatch { span, .. } => span,
            Self::UndefinedLabel { span, .. } => span,
            Self::InvalidBranchLabel { span, .. } => span,
            Self::BreakOutsideLoop { span } => span,
            Self::ContinueOutsideLoop { span } => span,
            Self::Unused(entity) => &entity.span,
        }
    }

    /// 转换为诊断信息
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).span(self.span().clone());
        match self {
            Self::DuplicateDefinition { previous_span, .. } => diag.with_note(format!(
                "previously defined at byte offset {}",
                previous_span.start
            )),
            Self::UndefinedPackage { name, .. } => {
                diag.with_help(format!("add an import whose last path segment is '{}'", name))
            }
            Self::Unused(_) => {
                diag.with_help("pass --warn-unused to report unused entities as warnings")
            }
            _ => diag,
        }
    }
}

/// 语义分析警告
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticWarning {
    #[error("{0}")]
    Unused(UnusedEntity),
}

impl SemanticWarning {
    pub fn span(&self) -> &Span {
        match self {
            Self::Unused(entity) => &entity.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(self.to_string()).span(self.span().clone())
    }
}
