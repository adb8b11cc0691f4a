//! Expression Parser
//!
//! 表达式解析：字面量、变量、运算符、函数调用

use super::helpers::{ident_parser, ParserError};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;
use tarn_diagnostics::SpanExt;

fn fold_binary(lhs: Expr, (op, rhs): (BinaryOp, Expr)) -> Expr {
    let span = lhs.span.merge(&rhs.span);
    Expr {
        kind: ExprKind::Binary(Box::new(lhs), op, Box::new(rhs)),
        span,
    }
}

/// 解析表达式 (公共接口)
pub fn expr_parser() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr| {
        let literal = select! {
            Token::Int(x) => Literal::Int(x),
            Token::String(s) => Literal::String(s),
            Token::True => Literal::Bool(true),
            Token::False => Literal::Bool(false),
        }
        .map_with_span(|lit, span| Expr {
            kind: ExprKind::Literal(lit),
            span,
        });

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        // 包限定调用: fmt.println(x)
        let qualified_call = ident_parser()
            .then_ignore(just(Token::Dot))
            .then(ident_parser())
            .then(args.clone())
            .map_with_span(|((package, callee), args), span| Expr {
                kind: ExprKind::QualifiedCall {
                    package,
                    callee,
                    args,
                },
                span,
            });

        // 函数调用: add(1, 2)
        let call = ident_parser()
            .then(args)
            .map_with_span(|(callee, args), span| Expr {
                kind: ExprKind::Call { callee, args },
                span,
            });

        let variable = ident_parser().map(|ident| Expr {
            kind: ExprKind::Variable(ident.name),
            span: ident.span,
        });

        let paren = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let atom = literal
            .or(qualified_call)
            .or(call)
            .or(variable)
            .or(paren)
            .boxed();

        // 一元运算符 (!, -)
        let unary = just(Token::Bang)
            .to(UnaryOp::Not)
            .or(just(Token::Minus).to(UnaryOp::Neg))
            .map_with_span(|op, span| (op, span))
            .repeated()
            .then(atom)
            .foldr(|(op, span): (UnaryOp, Span), rhs: Expr| Expr {
                span: span.merge(&rhs.span),
                kind: ExprKind::Unary(op, Box::new(rhs)),
            })
            .boxed();

        // 乘除模
        let product = unary
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .or(just(Token::Percent).to(BinaryOp::Mod))
                    .then(unary)
                    .repeated(),
            )
            .foldl(fold_binary)
            .boxed();

        // 加减
        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(fold_binary)
            .boxed();

        // 比较运算符 (<, >, <=, >=, ==, !=)
        let comparison = sum
            .clone()
            .then(
                just(Token::EqEq)
                    .to(BinaryOp::Eq)
                    .or(just(Token::NotEq).to(BinaryOp::Neq))
                    .or(just(Token::Leq).to(BinaryOp::Leq))
                    .or(just(Token::Geq).to(BinaryOp::Geq))
                    .or(just(Token::Lt).to(BinaryOp::Lt))
                    .or(just(Token::Gt).to(BinaryOp::Gt))
                    .then(sum)
                    .repeated(),
            )
            .foldl(fold_binary)
            .boxed();

        // 逻辑与 (&&)
        let logical_and = comparison
            .clone()
            .then(just(Token::And).to(BinaryOp::And).then(comparison).repeated())
            .foldl(fold_binary)
            .boxed();

        // 逻辑或 (||)
        logical_and
            .clone()
            .then(just(Token::Or).to(BinaryOp::Or).then(logical_and).repeated())
            .foldl(fold_binary)
            .boxed()
    })
}
