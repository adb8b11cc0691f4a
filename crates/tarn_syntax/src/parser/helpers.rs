//! Parser Helper Functions

use crate::ast::Ident;
use crate::lexer::Token;
use chumsky::prelude::*;

pub type ParserError = Simple<Token>;

/// 解析标识符（带位置）
pub fn ident_parser() -> impl Parser<Token, Ident, Error = ParserError> + Clone {
    select! { Token::Ident(name) => name }.map_with_span(|name, span| Ident::new(name, span))
}

/// 解析字符串字面量
pub fn string_parser() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::String(s) => s }
}
