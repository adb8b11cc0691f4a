//! Tarn Syntax
//!
//! 词法分析 (logos)、语法分析 (chumsky) 与 AST 定义

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::SyntaxError;
pub use parser::parse;
