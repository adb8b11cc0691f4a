//! SeverityPolicy - 未使用实体的严重级别策略
//!
//! 决定"声明但未使用"的局部变量、导入和标签报告为错误还是警告。
//!
//! 整个进程只有一个全局单元：
//! - 驱动在处理命令行选项时写入（至多一次），且必须早于语义分析；
//! - 之后所有代码只读。
//!
//! 推荐用法是驱动写入后调用 [`SeverityPolicy::current`] 取得快照，
//! 再把这个 `Copy` 值显式传给语义分析和并行的工作线程，
//! 热路径上不再读取全局单元。
//!
//! 默认值为"警告"。`vet` 不会写入策略，因此默认是非严格的；
//! 构建阶段已经做过同样的检查。

use crate::level::DiagnosticLevel;
use std::sync::atomic::{AtomicBool, Ordering};

/// 全局单元：未使用实体是否只作为警告
static UNUSED_IS_WARNING: AtomicBool = AtomicBool::new(true);

/// 设置未使用实体是否只作为警告
///
/// 只应由驱动在启动阶段调用一次，且在产生任何诊断之前。
///
/// 分析开始后再调用会导致同一次编译内结果不一致：
/// 已经判定过的诊断保持旧级别，尚未判定的诊断读到新值。
/// 全局查询函数不做快照，需要一致性时使用 [`SeverityPolicy::current`]。
pub fn set_warn_on_unused(enabled: bool) {
    UNUSED_IS_WARNING.store(enabled, Ordering::SeqCst);
    tracing::debug!(unused_is_warning = enabled, "severity policy updated");
}

/// 未使用实体是否必须升级为错误
pub fn is_unused_fatal() -> bool {
    !UNUSED_IS_WARNING.load(Ordering::SeqCst)
}

/// 未使用实体是否只作为警告
///
/// 恒等于 `!is_unused_fatal()`。
pub fn is_unused_non_fatal() -> bool {
    !is_unused_fatal()
}

/// 严重级别策略的不可变快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeverityPolicy {
    unused_is_warning: bool,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::warn()
    }
}

impl SeverityPolicy {
    /// 根据给定值创建策略
    pub const fn new(unused_is_warning: bool) -> Self {
        Self { unused_is_warning }
    }

    /// 未使用实体作为警告
    pub const fn warn() -> Self {
        Self::new(true)
    }

    /// 未使用实体作为错误
    pub const fn deny() -> Self {
        Self::new(false)
    }

    /// 读取全局单元的当前值
    pub fn current() -> Self {
        Self::new(is_unused_non_fatal())
    }

    pub fn is_unused_fatal(&self) -> bool {
        !self.unused_is_warning
    }

    pub fn is_unused_non_fatal(&self) -> bool {
        !self.is_unused_fatal()
    }

    /// 未使用实体诊断应使用的级别
    pub fn unused_level(&self) -> DiagnosticLevel {
        if self.is_unused_fatal() {
            DiagnosticLevel::Error
        } else {
            DiagnosticLevel::Warning
        }
    }
}
