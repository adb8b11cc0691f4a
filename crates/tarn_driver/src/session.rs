//! Compile Session
//!
//! 驱动拥有严重级别策略：创建会话时根据选项写入全局策略（至多一次），
//! 随后取得快照。之后的所有阶段（包括并行的工作线程）只使用这个快照。

use crate::{check, check_files, compile, CompilationOutput, CompileResult, FileReport};
use std::path::{Path, PathBuf};
use tarn_diagnostics::{set_warn_on_unused, Diagnostic, SeverityPolicy};

/// 命令行对未使用实体策略的覆盖
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnusedOverride {
    /// 不写入，保留当前策略
    #[default]
    Default,
    /// 报告为警告
    Warn,
    /// 报告为错误
    Deny,
}

/// 编译选项
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub unused: UnusedOverride,
}

impl CompileOptions {
    pub fn with_unused(mut self, unused: UnusedOverride) -> Self {
        self.unused = unused;
        self
    }
}

/// 一次编译器调用
#[derive(Debug)]
pub struct Session {
    policy: SeverityPolicy,
}

impl Session {
    /// 应用选项并冻结策略
    ///
    /// 必须在任何分析开始之前调用。
    pub fn new(options: &CompileOptions) -> Self {
        match options.unused {
            UnusedOverride::Default => {}
            UnusedOverride::Warn => set_warn_on_unused(true),
            UnusedOverride::Deny => set_warn_on_unused(false),
        }

        let policy = SeverityPolicy::current();
        tracing::debug!(
            unused_override = ?options.unused,
            unused_fatal = policy.is_unused_fatal(),
            "session created"
        );
        Self { policy }
    }

    pub fn policy(&self) -> SeverityPolicy {
        self.policy
    }

    pub fn compile(&self, source: &str) -> CompileResult<CompilationOutput> {
        compile(source, self.policy)
    }

    pub fn compile_file(&self, path: impl AsRef<Path>) -> CompileResult<CompilationOutput> {
        crate::compile_file(path, self.policy)
    }

    pub fn check(&self, source: &str) -> CompileResult<Vec<Diagnostic>> {
        check(source, self.policy)
    }

    pub fn check_files(&self, paths: &[PathBuf]) -> Vec<FileReport> {
        check_files(paths, self.policy)
    }
}
