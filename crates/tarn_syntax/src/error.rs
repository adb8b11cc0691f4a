//! Syntax Errors
//!
//! 词法与语法错误

use crate::ast::Span;
use crate::lexer::Token;
use chumsky::error::Simple;
use tarn_diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// 无法识别的字符
    #[error("unknown token '{text}'")]
    UnknownToken { text: String, span: Span },

    /// 解析器遇到意外的 token
    #[error("unexpected {found}")]
    Unexpected {
        found: String,
        expected: Vec<String>,
        span: Span,
    },
}

impl SyntaxError {
    pub fn span(&self) -> &Span {
        match self {
            Self::UnknownToken { span, .. } => span,
            Self::Unexpected { span, .. } => span,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, Self::UnknownToken { .. })
    }

    /// 转换为诊断信息
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string()).span(self.span().clone());
        match self {
            Self::Unexpected { expected, .. } if !expected.is_empty() => {
                diag.with_note(format!("expected one of: {}", expected.join(", ")))
            }
            _ => diag,
        }
    }
}

impl From<Simple<Token>> for SyntaxError {
    fn from(err: Simple<Token>) -> Self {
        let found = err
            .found()
            .map(ToString::to_string)
            .unwrap_or_else(|| "end of input".to_string());
        let mut expected: Vec<String> = err
            .expected()
            .map(|tok| match tok {
                Some(tok) => tok.to_string(),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();

        Self::Unexpected {
            found,
            expected,
            span: err.span(),
        }
    }
}
