//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出到 stderr。
//! 有源码时使用 ariadne 渲染带下划线的片段，否则输出单行摘要。

use crate::diagnostic::Diagnostic;
use ariadne::{Config, IndexType, Label, Report, Source};
use std::io;

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出单个诊断
    pub fn emit(&self, diagnostic: &Diagnostic) {
        eprintln!("{}", self.render(diagnostic));
    }

    /// 结合源码输出诊断
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        if diagnostic.span.is_none() {
            self.emit(diagnostic);
            return;
        }
        if let Err(err) = self.write_with_source(diagnostic, source, io::stderr()) {
            tracing::warn!(error = %err, "failed to render diagnostic, using plain output");
            self.emit(diagnostic);
        }
    }

    /// 使用 ariadne 把诊断写入任意输出
    ///
    /// span 是词法分析器给出的字节偏移，ariadne 也按字节索引。
    pub fn write_with_source<W: io::Write>(
        &self,
        diagnostic: &Diagnostic,
        source: &str,
        out: W,
    ) -> io::Result<()> {
        let file = diagnostic.file.as_deref().unwrap_or("<input>");
        let span = diagnostic.span.clone().unwrap_or(0..0);

        let mut report = Report::build(diagnostic.level.report_kind(), file, span.start)
            .with_config(
                Config::default()
                    .with_color(self.use_colors)
                    .with_index_type(IndexType::Byte),
            )
            .with_message(&diagnostic.message)
            .with_label(Label::new((file, span)).with_message(&diagnostic.message));

        for note in &diagnostic.notes {
            report = report.with_note(note);
        }
        for help in &diagnostic.help {
            report = report.with_help(help);
        }

        report.finish().write((file, Source::from(source)), out)
    }

    /// 渲染为单行摘要（附带注释和提示）
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let level = if self.use_colors {
            diagnostic.level.colored_name().to_string()
        } else {
            diagnostic.level.to_string()
        };

        let mut out = match (&diagnostic.file, &diagnostic.span) {
            (Some(file), Some(span)) => format!("{}:{}: ", file, span.start),
            (Some(file), None) => format!("{}: ", file),
            _ => String::new(),
        };
        out.push_str(&format!("{}: {}", level, diagnostic.message));

        for note in &diagnostic.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &diagnostic.help {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}
