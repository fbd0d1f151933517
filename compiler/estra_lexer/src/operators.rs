//! Fixed operator/delimiter table.
//!
//! Exact string match, no prefix logic. `a==b` is three lexemes by the
//! time it reaches classification, so the table only ever sees a complete
//! candidate.

use estra_ir::Symbol;

/// Look up a lexeme in the operator/delimiter table.
pub fn lookup(lexeme: &str) -> Option<Symbol> {
    let sym = match lexeme {
        ";" => Symbol::Semicolon,
        "(" => Symbol::LParen,
        ")" => Symbol::RParen,
        "[" => Symbol::LBracket,
        "]" => Symbol::RBracket,
        "{" => Symbol::LBrace,
        "}" => Symbol::RBrace,
        "," => Symbol::Comma,
        "=" => Symbol::Assign,
        "+" => Symbol::Plus,
        "-" => Symbol::Minus,
        "*" => Symbol::Star,
        "/" => Symbol::Slash,
        "<" => Symbol::Lt,
        ">" => Symbol::Gt,
        "." => Symbol::Dot,
        "==" => Symbol::EqEq,
        "!=" => Symbol::NotEq,
        "<=" => Symbol::LtEq,
        ">=" => Symbol::GtEq,
        "&&" => Symbol::AndAnd,
        "||" => Symbol::OrOr,
        _ => return None,
    };
    Some(sym)
}
