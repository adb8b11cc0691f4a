//! Declaration Parser
//!
//! 顶层声明解析：导入、函数

use super::helpers::{ident_parser, string_parser, ParserError};
use super::stmt::stmt_parser;
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 导入: import "os/path" as p;
pub fn import_parser() -> impl Parser<Token, Import, Error = ParserError> + Clone {
    just(Token::Import)
        .ignore_then(string_parser())
        .then(just(Token::As).ignore_then(ident_parser()).or_not())
        .then_ignore(just(Token::Semicolon))
        .map_with_span(|(path, alias), span| Import { path, alias, span })
}

/// 函数: func add(a, b) { ... }
pub fn function_parser() -> impl Parser<Token, Function, Error = ParserError> + Clone {
    just(Token::Func)
        .ignore_then(ident_parser())
        .then(
            ident_parser()
                .separated_by(just(Token::Comma))
                .allow_trailing()
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then(
            stmt_parser()
                .repeated()
                .delimited_by(just(Token::LBrace), just(Token::RBrace)),
        )
        .map_with_span(|((name, params), body), span| Function {
            name,
            params,
            body,
            span,
        })
}
