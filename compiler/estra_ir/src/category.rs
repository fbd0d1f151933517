//! Lexical categories for classified tokens.
//!
//! A [`TokenCategory`] is the class tag the parser dispatches on. Keyword
//! categories carry a [`KeywordClass`] (what role the reserved word plays in
//! the DSL); operators and delimiters carry a [`Symbol`]; unrecognized
//! lexemes carry a [`LexErrorKind`].

use std::fmt;

/// Semantic class of a reserved word in the keyword category table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeywordClass {
    /// A data-structure name (`PILA`, `COLA`, `ARBOL_BINARIO`, ...).
    Structure,
    /// An operation verb (`INSERTAR`, `DESAPILAR`, `BUSCAR`, ...).
    Action,
    /// A structure property query (`TAMAÑO`, `ALTURA`, `VACIAT`, ...).
    Property,
    /// A connective word (`EN`, `CON`, `VALOR`).
    Auxiliary,
    /// A control word (`IF`, `ELSE`, `MOSTRAR`).
    Control,
}

impl fmt::Display for KeywordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            KeywordClass::Structure => "structure",
            KeywordClass::Action => "action",
            KeywordClass::Property => "property",
            KeywordClass::Auxiliary => "auxiliary",
            KeywordClass::Control => "control",
        };
        f.write_str(tag)
    }
}

/// Operators and delimiters recognized by the fixed fast-path table.
///
/// The set is small and closed, so it is a literal table rather than a
/// state machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Symbol {
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Assign,    // =
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Lt,        // <
    Gt,        // >
    Dot,       // .
    EqEq,      // ==
    NotEq,     // !=
    LtEq,      // <=
    GtEq,      // >=
    AndAnd,    // &&
    OrOr,      // ||
}

impl Symbol {
    /// The literal spelling of this symbol in source text.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Semicolon => ";",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::LBracket => "[",
            Symbol::RBracket => "]",
            Symbol::LBrace => "{",
            Symbol::RBrace => "}",
            Symbol::Comma => ",",
            Symbol::Assign => "=",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::Dot => ".",
            Symbol::EqEq => "==",
            Symbol::NotEq => "!=",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::AndAnd => "&&",
            Symbol::OrOr => "||",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Symbol::Semicolon => "semicolon",
            Symbol::LParen => "lparen",
            Symbol::RParen => "rparen",
            Symbol::LBracket => "lbracket",
            Symbol::RBracket => "rbracket",
            Symbol::LBrace => "lbrace",
            Symbol::RBrace => "rbrace",
            Symbol::Comma => "comma",
            Symbol::Assign => "assign",
            Symbol::Plus => "plus",
            Symbol::Minus => "minus",
            Symbol::Star => "star",
            Symbol::Slash => "slash",
            Symbol::Lt => "less-than",
            Symbol::Gt => "greater-than",
            Symbol::Dot => "dot",
            Symbol::EqEq => "equals",
            Symbol::NotEq => "not-equals",
            Symbol::LtEq => "less-equals",
            Symbol::GtEq => "greater-equals",
            Symbol::AndAnd => "logical-and",
            Symbol::OrOr => "logical-or",
        };
        f.write_str(tag)
    }
}

/// What kind of lexical error an unrecognized token carries.
///
/// All error kinds are recovered locally: the classifier emits an error
/// token and moves on, it never aborts the stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A lexeme that opened a `"` string literal but never closed it.
    UnterminatedString,
    /// A single character that is not in the operator/delimiter table.
    InvalidSymbol,
    /// Catch-all: any other unrecognized lexeme (e.g. `234Inválido`).
    MalformedToken,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LexErrorKind::UnterminatedString => "unterminated-string",
            LexErrorKind::InvalidSymbol => "invalid-symbol",
            LexErrorKind::MalformedToken => "malformed-token",
        };
        f.write_str(tag)
    }
}

/// Lexical category of a classified token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    /// A reserved word with a known semantic class.
    Keyword(KeywordClass),
    /// A reserved word accepted by the automaton but missing from the
    /// category table. Signals a configuration gap in the dialect, not a
    /// user input error, so it stays distinct from the error kinds.
    UnknownReserved,
    /// A generic identifier (`miPila`, `_tmp`, ...).
    Ident,
    /// A signed integer literal (`42`, `-7`, `+300`).
    Int,
    /// A quoted string literal (`"hola"`).
    Str,
    /// An operator or delimiter from the fixed table.
    Symbol(Symbol),
    /// An unrecognized lexeme; see [`LexErrorKind`].
    Error(LexErrorKind),
}

impl TokenCategory {
    /// `true` for the error categories.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, TokenCategory::Error(_))
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCategory::Keyword(class) => write!(f, "{class}"),
            TokenCategory::UnknownReserved => f.write_str("unknown-reserved"),
            TokenCategory::Ident => f.write_str("identifier"),
            TokenCategory::Int => f.write_str("int-literal"),
            TokenCategory::Str => f.write_str("str-literal"),
            TokenCategory::Symbol(sym) => write!(f, "{sym}"),
            TokenCategory::Error(kind) => write!(f, "error:{kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_class_display_tags() {
        assert_eq!(KeywordClass::Structure.to_string(), "structure");
        assert_eq!(KeywordClass::Action.to_string(), "action");
        assert_eq!(KeywordClass::Property.to_string(), "property");
        assert_eq!(KeywordClass::Auxiliary.to_string(), "auxiliary");
        assert_eq!(KeywordClass::Control.to_string(), "control");
    }

    #[test]
    fn symbol_spelling_round_trips_through_display() {
        // Spelling and display tag are distinct: `;` vs "semicolon".
        assert_eq!(Symbol::Semicolon.as_str(), ";");
        assert_eq!(Symbol::Semicolon.to_string(), "semicolon");
        assert_eq!(Symbol::EqEq.as_str(), "==");
        assert_eq!(Symbol::OrOr.as_str(), "||");
    }

    #[test]
    fn error_categories_are_errors() {
        assert!(TokenCategory::Error(LexErrorKind::InvalidSymbol).is_error());
        assert!(TokenCategory::Error(LexErrorKind::UnterminatedString).is_error());
        assert!(TokenCategory::Error(LexErrorKind::MalformedToken).is_error());
    }

    #[test]
    fn non_error_categories_are_not_errors() {
        assert!(!TokenCategory::Keyword(KeywordClass::Structure).is_error());
        assert!(!TokenCategory::UnknownReserved.is_error());
        assert!(!TokenCategory::Ident.is_error());
        assert!(!TokenCategory::Int.is_error());
        assert!(!TokenCategory::Str.is_error());
        assert!(!TokenCategory::Symbol(Symbol::Comma).is_error());
    }

    #[test]
    fn category_display_tags() {
        assert_eq!(
            TokenCategory::Keyword(KeywordClass::Action).to_string(),
            "action"
        );
        assert_eq!(TokenCategory::Ident.to_string(), "identifier");
        assert_eq!(
            TokenCategory::Error(LexErrorKind::MalformedToken).to_string(),
            "error:malformed-token"
        );
    }
}
