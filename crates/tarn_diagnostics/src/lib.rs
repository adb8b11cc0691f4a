//! Tarn Diagnostics
//!
//! 统一的诊断系统，为 Tarn 编译器提供错误报告，
//! 并持有"未使用实体"严重级别策略。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Note）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`SeverityPolicy`] - 未使用实体报告为错误还是警告
//! - [`Span`] - 源码位置信息
//!
//! # 示例
//!
//! ```rust
//! use tarn_diagnostics::{Diagnostic, DiagnosticSink, SeverityPolicy};
//!
//! let policy = SeverityPolicy::default();
//! let mut sink = DiagnosticSink::new();
//!
//! sink.add(Diagnostic::new(policy.unused_level(), "declared and not used: x").span(4..5));
//!
//! // 默认策略下未使用变量只是警告
//! assert!(!sink.has_errors());
//! assert_eq!(sink.warning_count(), 1);
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod policy;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::Diagnostic;
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use policy::{is_unused_fatal, is_unused_non_fatal, set_warn_on_unused, SeverityPolicy};
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
