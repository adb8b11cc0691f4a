//! Code Generation Error Types
//!
//! 语义分析通过后这些错误不应出现，出现即说明前端漏检。

use tarn_diagnostics::Diagnostic;
use thiserror::Error;

/// 代码生成错误
#[derive(Debug, Error)]
pub enum CodegenError {
    /// 未定义的变量
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// 未定义的包
    #[error("undefined package: {0}")]
    UndefinedPackage(String),

    /// 跳转目标不存在
    #[error("no target for {0}")]
    MissingJumpTarget(String),
}

impl CodegenError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(format!("code generation failed: {}", self))
            .with_note("this is a compiler bug: semantic analysis should have rejected the program")
    }
}

/// 代码生成结果类型
pub type CodegenResult<T> = Result<T, CodegenError>;
