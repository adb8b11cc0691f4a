use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // --- 关键字 (Keywords) ---
    #[token("import")]
    Import,
    #[token("as")]
    As,
    #[token("func")]
    Func,
    #[token("var")]
    Var,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("goto")]
    Goto,
    #[token("return")]
    Return,

    // 字面量关键字
    #[token("true")]
    True,
    #[token("false")]
    False,

    // --- 符号 (Symbols) ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    Leq,
    #[token(">=")]
    Geq,

    #[token("!")]
    Bang,
    #[token("&&")]
    And,
    #[token("||")]
    Or,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    // --- 复杂数据 (Data) ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // 溢出时返回 None，由 logos 报告为词法错误
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Int(i64),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unescape(lex.slice()))]
    String(String),
}

/// 去掉引号并处理转义
fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "identifier '{}'", name),
            Token::Int(n) => write!(f, "integer {}", n),
            Token::String(s) => write!(f, "string {:?}", s),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(code: &str) -> Vec<Token> {
        Token::lexer(code).map(|t| t.expect("lex error")).collect()
    }

    #[test]
    fn test_lexer_basic() {
        assert_eq!(
            lex("var a = 10 + 20;"),
            vec![
                Token::Var,
                Token::Ident("a".to_string()),
                Token::Eq,
                Token::Int(10),
                Token::Plus,
                Token::Int(20),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_import_and_comment() {
        assert_eq!(
            lex("import \"os/path\" as p; // trailing\n"),
            vec![
                Token::Import,
                Token::String("os/path".to_string()),
                Token::As,
                Token::Ident("p".to_string()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_keywords_are_not_identifiers() {
        assert_eq!(lex("goto gotox"), vec![Token::Goto, Token::Ident("gotox".to_string())]);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(lex(r#""a\n\"b""#), vec![Token::String("a\n\"b".to_string())]);
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let tokens: Vec<_> = Token::lexer("var x = @;").collect();
        assert!(tokens.iter().any(|t| t.is_err()));
    }
}
