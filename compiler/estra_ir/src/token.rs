//! The classified token record.

use std::fmt;

use crate::TokenCategory;

/// Diagnostic label of the automaton state a token was accepted in.
///
/// Only keyword tokens carry a state; everything else reports the explicit
/// not-applicable marker (`N/A`), matching what the token table prints.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum StateLabel {
    /// No automaton state applies to this token.
    #[default]
    NotApplicable,
    /// The prefix label of the accepting (or table-lookup) state.
    State(String),
}

impl StateLabel {
    /// Build a label from an owned or borrowed string.
    pub fn state(label: impl Into<String>) -> Self {
        StateLabel::State(label.into())
    }

    /// The label text, or `None` for the not-applicable marker.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateLabel::NotApplicable => None,
            StateLabel::State(label) => Some(label),
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateLabel::NotApplicable => f.write_str("N/A"),
            StateLabel::State(label) => f.write_str(label),
        }
    }
}

/// One classified token.
///
/// Immutable after creation: the classifier builds a token and hands it
/// off; nothing downstream mutates it. The lexeme keeps its original
/// casing even when the keyword automaton matched the case-folded form.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    /// Lexeme text exactly as it appeared in the source.
    pub lexeme: String,
    /// 1-based source line the lexeme started on.
    pub line: u32,
    /// Lexical category.
    pub category: TokenCategory,
    /// Diagnostic automaton state label.
    pub state: StateLabel,
    /// `false` for the error tokens of a recovered lexical error.
    pub recognized: bool,
}

impl Token {
    /// A recognized token with no automaton state.
    pub fn recognized(lexeme: impl Into<String>, line: u32, category: TokenCategory) -> Self {
        Token {
            lexeme: lexeme.into(),
            line,
            category,
            state: StateLabel::NotApplicable,
            recognized: true,
        }
    }

    /// A recognized token carrying its accepting-state label.
    pub fn with_state(
        lexeme: impl Into<String>,
        line: u32,
        category: TokenCategory,
        state: StateLabel,
    ) -> Self {
        Token {
            lexeme: lexeme.into(),
            line,
            category,
            state,
            recognized: true,
        }
    }

    /// An unrecognized (error) token.
    pub fn unrecognized(lexeme: impl Into<String>, line: u32, category: TokenCategory) -> Self {
        Token {
            lexeme: lexeme.into(),
            line,
            category,
            state: StateLabel::NotApplicable,
            recognized: false,
        }
    }

    /// `true` if this token carries an error category.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.category.is_error()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({}) @ line {} [{}]",
            self.lexeme, self.category, self.line, self.state
        )
    }
}
