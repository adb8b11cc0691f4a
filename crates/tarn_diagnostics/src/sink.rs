//! DiagnosticSink - 诊断收集器
//!
//! 收集一次编译过程中的所有诊断信息

use crate::diagnostic::Diagnostic;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level.is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// 批量添加
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.add(diagnostic);
        }
    }

    /// 添加错误
    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::error(message));
    }

    /// 添加警告
    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Diagnostic::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// 获取警告数量
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level.is_warning())
            .count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut sink = DiagnosticSink::new();
        sink.warning("declared and not used: x");
        sink.warning("\"fmt\" imported and not used");

        assert!(!sink.has_errors());
        assert_eq!(sink.warning_count(), 2);
        assert_eq!(sink.error_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut sink = DiagnosticSink::new();
        sink.error("e1");
        sink.extend([Diagnostic::error("e2"), Diagnostic::warning("w1")]);
        sink.add(Diagnostic::note("n1"));

        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.len(), 4);
    }
}
