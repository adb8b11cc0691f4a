//! Compilation Errors
//!
//! 编译器驱动层的错误类型，集成统一诊断系统

use tarn_codegen::CodegenError;
use tarn_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use tarn_sema::{AnalysisErrors, SemanticError};
use tarn_syntax::SyntaxError;
use thiserror::Error;

/// 编译错误
#[derive(Debug, Error)]
pub enum CompileError {
    /// 词法错误
    #[error("Lexical errors:\n{}", format_numbered(.0))]
    LexError(Vec<SyntaxError>),

    /// 语法错误
    #[error("Parse errors:\n{}", format_numbered(.0))]
    ParseError(Vec<SyntaxError>),

    /// 语义错误（附带同时产生的警告）
    #[error("Semantic errors:\n{}", format_analysis(.0))]
    SemanticErrors(#[from] AnalysisErrors),

    /// 代码生成错误
    #[error("Code generation error: {0}")]
    CodegenError(#[from] CodegenError),

    /// IO 错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CompileError {
    /// 按词法/语法区分语法错误
    pub fn from_syntax(errors: Vec<SyntaxError>) -> Self {
        if errors.iter().any(SyntaxError::is_lexical) {
            Self::LexError(errors)
        } else {
            Self::ParseError(errors)
        }
    }

    /// 语义错误列表（其他种类为空）
    pub fn semantic_errors(&self) -> &[SemanticError] {
        match self {
            Self::SemanticErrors(failure) => &failure.errors,
            _ => &[],
        }
    }

    /// 转换为诊断列表并收集到 DiagnosticSink
    pub fn collect_to_sink(&self, sink: &mut DiagnosticSink, file_path: Option<&str>) {
        let mut diagnostics: Vec<Diagnostic> = match self {
            Self::LexError(errors) | Self::ParseError(errors) => {
                errors.iter().map(SyntaxError::to_diagnostic).collect()
            }
            Self::SemanticErrors(failure) => failure
                .errors
                .iter()
                .map(SemanticError::to_diagnostic)
                .chain(failure.warnings.iter().map(|w| w.to_diagnostic()))
                .collect(),
            Self::CodegenError(err) => vec![err.to_diagnostic()],
            Self::IoError(err) => vec![Diagnostic::error(format!("IO error: {}", err))],
        };
        diagnostics.sort_by_key(|d| d.span.as_ref().map_or(0, |s| s.start));

        for diag in diagnostics {
            match file_path {
                Some(path) => sink.add(diag.with_file(path)),
                None => sink.add(diag),
            }
        }
    }

    /// 使用统一诊断系统输出错误
    pub fn emit(&self, emitter: &Emitter, file_path: Option<&str>, source: Option<&str>) {
        let mut sink = DiagnosticSink::new();
        self.collect_to_sink(&mut sink, file_path);
        crate::emit_diagnostics(emitter, sink.diagnostics(), source);
    }
}

/// 格式化编号列表
fn format_numbered<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_analysis(failure: &AnalysisErrors) -> String {
    format_numbered(&failure.errors)
}

/// 编译结果类型
pub type CompileResult<T> = Result<T, CompileError>;
