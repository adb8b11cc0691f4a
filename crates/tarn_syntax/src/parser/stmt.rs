//! Statement Parser
//!
//! 语句解析：变量声明、赋值、控制流、标签与跳转

use super::expr::expr_parser;
use super::helpers::{ident_parser, ParserError};
use crate::ast::*;
use crate::lexer::Token;
use chumsky::prelude::*;

/// 解析语句 (公共接口)
pub fn stmt_parser() -> impl Parser<Token, Stmt, Error = ParserError> + Clone {
    let expr = expr_parser();
    let ident = ident_parser();

    recursive(|stmt| {
        let semi = just(Token::Semicolon);

        let raw_block = stmt
            .clone()
            .repeated()
            .delimited_by(just(Token::LBrace), just(Token::RBrace))
            .boxed();

        // 变量声明: var x = 1;
        let var_decl = just(Token::Var)
            .ignore_then(ident.clone())
            .then_ignore(just(Token::Eq))
            .then(expr.clone())
            .then_ignore(semi.clone())
            .map_with_span(|(name, value), span| Stmt::VarDecl { name, value, span });

        // 赋值语句: x = 10;
        let assign = ident
            .clone()
            .then_ignore(just(Token::Eq))
            .then(expr.clone())
            .then_ignore(semi.clone())
            .map_with_span(|(target, value), span| Stmt::Assign {
                target,
                value,
                span,
            });

        let expr_stmt = expr.clone().then_ignore(semi.clone()).map(Stmt::Expression);

        let block_stmt = raw_block.clone().map(Stmt::Block);

        // if / else if / else
        let if_stmt = recursive(|if_stmt| {
            just(Token::If)
                .ignore_then(expr.clone())
                .then(raw_block.clone())
                .then(
                    just(Token::Else)
                        .ignore_then(raw_block.clone().or(if_stmt.map(|s| vec![s])))
                        .or_not(),
                )
                .map_with_span(|((condition, then_block), else_block), span| Stmt::If {
                    condition,
                    then_block,
                    else_block,
                    span,
                })
        });

        let while_stmt = just(Token::While)
            .ignore_then(expr.clone())
            .then(raw_block.clone())
            .map_with_span(|(condition, body), span| Stmt::While {
                condition,
                body,
                span,
            });

        let break_stmt = just(Token::Break)
            .ignore_then(ident.clone().or_not())
            .then_ignore(semi.clone())
            .map_with_span(|label, span| Stmt::Break { label, span });

        let continue_stmt = just(Token::Continue)
            .ignore_then(ident.clone().or_not())
            .then_ignore(semi.clone())
            .map_with_span(|label, span| Stmt::Continue { label, span });

        let goto_stmt = just(Token::Goto)
            .ignore_then(ident.clone())
            .then_ignore(semi.clone())
            .map_with_span(|label, span| Stmt::Goto { label, span });

        let ret = just(Token::Return)
            .ignore_then(expr.clone().or_not())
            .then_ignore(semi)
            .map_with_span(|value, span| Stmt::Return { value, span });

        // 标签: outer: while (...) { ... }
        let labeled = ident
            .clone()
            .then_ignore(just(Token::Colon))
            .then(stmt)
            .map_with_span(|(label, body), span| Stmt::Labeled {
                label,
                body: Box::new(body),
                span,
            });

        var_decl
            .or(if_stmt)
            .or(while_stmt)
            .or(break_stmt)
            .or(continue_stmt)
            .or(goto_stmt)
            .or(ret)
            .or(block_stmt)
            .or(labeled)
            .or(assign)
            .or(expr_stmt)
            .boxed()
    })
}
