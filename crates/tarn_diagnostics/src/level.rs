//! DiagnosticLevel - 诊断级别

use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// 错误 - 编译失败，不产生目标文件
    Error,
    /// 警告 - 编译继续
    Warning,
    /// 注释 - 补充说明
    Note,
}

impl DiagnosticLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Note => "note",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
            Self::Note => self.name().bright_black().bold(),
        }
    }

    /// 对应的 ariadne 报告类型
    pub fn report_kind(&self) -> ariadne::ReportKind<'static> {
        match self {
            Self::Error => ariadne::ReportKind::Error,
            Self::Warning => ariadne::ReportKind::Warning,
            Self::Note => ariadne::ReportKind::Advice,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
