//! Parser Module
//!
//! 词法分析 + chumsky 语法分析，入口为 [`parse`]

pub mod decl;
pub mod expr;
pub mod helpers;
pub mod stmt;

pub use helpers::ParserError;

use crate::ast::Program;
use crate::error::SyntaxError;
use crate::lexer::Token;
use chumsky::prelude::*;
use chumsky::Stream;
use logos::Logos;

/// 主入口：解析整个程序
pub fn program_parser() -> impl Parser<Token, Program, Error = ParserError> {
    decl::import_parser()
        .repeated()
        .then(decl::function_parser().repeated())
        .then_ignore(end())
        .map(|(imports, funcs)| Program { imports, funcs })
}

/// 把源码解析为 AST
///
/// 词法错误优先报告；没有词法错误时才运行语法分析。
pub fn parse(source: &str) -> Result<Program, Vec<SyntaxError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(_) => errors.push(SyntaxError::UnknownToken {
                text: source[span.clone()].to_string(),
                span,
            }),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let eoi = source.len()..source.len();
    program_parser()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errs| errs.into_iter().map(SyntaxError::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn parse_ok(source: &str) -> Program {
        match parse(source) {
            Ok(program) => program,
            Err(errors) => panic!("parse failed: {:?}", errors),
        }
    }

    #[test]
    fn test_parse_imports() {
        let program = parse_ok(
            r#"
            import "fmt";
            import "os/path" as p;
            import "net/http";
            "#,
        );

        let names: Vec<_> = program.imports.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["fmt", "p", "http"]);
        assert!(program.funcs.is_empty());
    }

    #[test]
    fn test_parse_function_with_locals() {
        let source = "func main() { var x = 1 + 2 * 3; x = x - 1; return x; }";
        let program = parse_ok(source);

        assert_eq!(program.funcs.len(), 1);
        let main = &program.funcs[0];
        assert_eq!(main.name.name, "main");
        assert_eq!(main.body.len(), 3);

        match &main.body[0] {
            Stmt::VarDecl { name, value, .. } => {
                assert_eq!(name.name, "x");
                assert_eq!(&source[name.span.clone()], "x");
                match &value.kind {
                    ExprKind::Binary(_, BinaryOp::Add, rhs) => {
                        assert!(matches!(rhs.kind, ExprKind::Binary(_, BinaryOp::Mul, _)));
                    }
                    other => panic!("expected addition, got {:?}", other),
                }
            }
            other => panic!("expected var decl, got {:?}", other),
        }
        assert!(matches!(main.body[1], Stmt::Assign { .. }));
        assert!(matches!(main.body[2], Stmt::Return { value: Some(_), .. }));
    }

    #[test]
    fn test_parse_labels_and_jumps() {
        let program = parse_ok(
            r#"
            func main() {
                outer:
                while (true) {
                    if (1 < 2) { continue outer; } else if (2 < 3) { break; } else { goto done; }
                }
                done: return;
            }
            "#,
        );

        let body = &program.funcs[0].body;
        assert_eq!(body.len(), 2);
        match &body[0] {
            Stmt::Labeled { label, body, .. } => {
                assert_eq!(label.name, "outer");
                assert!(matches!(**body, Stmt::While { .. }));
            }
            other => panic!("expected labeled statement, got {:?}", other),
        }
        match &body[1] {
            Stmt::Labeled { label, body, .. } => {
                assert_eq!(label.name, "done");
                assert!(matches!(**body, Stmt::Return { value: None, .. }));
            }
            other => panic!("expected labeled return, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_qualified_call() {
        let program = parse_ok(r#"import "fmt"; func main() { fmt.println("hi", 1); }"#);

        match &program.funcs[0].body[0] {
            Stmt::Expression(Expr {
                kind: ExprKind::QualifiedCall { package, callee, args },
                ..
            }) => {
                assert_eq!(package.name, "fmt");
                assert_eq!(callee.name, "println");
                assert_eq!(args.len(), 2);
            }
            other => panic!("expected qualified call, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_is_reported() {
        let errors = parse("func main() { var x = 1 }").unwrap_err();
        assert!(!errors.is_empty());
        assert!(errors.iter().all(|e| !e.is_lexical()));
    }

    #[test]
    fn test_unknown_token_is_reported() {
        let errors = parse("func main() { var x = 1 @ 2; }").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_lexical());
        assert_eq!(errors[0].span(), &(24..25));
    }
}
