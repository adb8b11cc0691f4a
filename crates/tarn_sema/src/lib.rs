//! Tarn Semantic Analysis
//!
//! 语义分析模块，负责：
//! - 名称解析 (Resolver)
//! - 标签与跳转检查
//! - 未使用实体检测（局部变量、导入、标签）
//!
//! 未使用实体的严重级别由调用方传入的 [`SeverityPolicy`] 决定，
//! 分析过程中不会读取全局策略。

pub mod error;
pub mod resolver;
pub mod scope;
pub mod symbol;
pub mod unused;

// 重新导出核心类型
pub use error::{SemanticError, SemanticWarning};
pub use resolver::Resolver;
pub use scope::{Local, LocalKind, ScopeStack};
pub use unused::{UnusedEntity, UnusedKind};

use tarn_diagnostics::SeverityPolicy;
use tarn_syntax::ast::Program;
use thiserror::Error;
use unused::Routed;

/// 语义分析结果
#[derive(Debug, Default)]
pub struct AnalysisResult {
    /// 非致命的发现
    pub warnings: Vec<SemanticWarning>,
}

/// 语义分析失败：至少一个错误，同时保留已产生的警告
#[derive(Debug, Clone, Error)]
#[error("{} semantic error(s)", .errors.len())]
pub struct AnalysisErrors {
    pub errors: Vec<SemanticError>,
    pub warnings: Vec<SemanticWarning>,
}

/// 分析整个程序
///
/// 1. **Resolver**: 收集定义，解析名称引用，记录未使用实体
/// 2. **分流**: 每个未使用实体按 `policy` 成为错误或警告
///
/// # Errors
///
/// 返回所有收集到的语义错误，以及同时产生的警告
pub fn analyze(
    program: &Program,
    policy: SeverityPolicy,
) -> Result<AnalysisResult, AnalysisErrors> {
    let mut resolver = Resolver::new();
    resolver.resolve(program);
    let (mut errors, unused) = resolver.finish();

    let mut warnings = Vec::new();
    for entity in unused {
        match unused::route(entity, policy) {
            Routed::Error(err) => errors.push(err),
            Routed::Warning(warning) => warnings.push(warning),
        }
    }
    errors.sort_by_key(|e| e.span().start);

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        unused_fatal = policy.is_unused_fatal(),
        "semantic analysis finished"
    );

    if errors.is_empty() {
        Ok(AnalysisResult { warnings })
    } else {
        Err(AnalysisErrors { errors, warnings })
    }
}
