//! Lexical classifier for the Estra data-structures DSL.
//!
//! The pipeline has two stages. [`segment`] cuts raw source into
//! [`RawLexeme`]s: whitespace-separated words, isolated punctuation,
//! quoted literals, with `//` comments stripped and 1-based line numbers
//! attached. [`classify`] then maps each raw lexeme to one or two
//! [`Token`]s against a keyword [`Automaton`], in a fixed priority order
//! (operator table, integer, string literal, automaton walk, identifier
//! override, partial-match recovery, error taxonomy).
//!
//! [`tokenize`] glues the stages together for the common whole-source
//! case. Lexical errors never abort: they come back as unrecognized
//! tokens in stream order, and [`lexical_errors`] filters them out of a
//! finished stream.
//!
//! ```
//! use estra_automaton::{Automaton, Dialect};
//! use estra_lexer::tokenize;
//!
//! let dfa = Automaton::build(&Dialect::estra()).expect("built-in dialect");
//! let tokens = tokenize(&dfa, "PILA miPila;\nAPILAR 5 EN miPila;");
//! assert!(tokens.iter().all(|t| t.recognized));
//! ```

pub mod classifier;
pub mod operators;
pub mod recognizers;
pub mod segment;

pub use classifier::{classify, Classified};
pub use segment::{segment, RawLexeme};

use estra_automaton::Automaton;
use estra_ir::Token;

/// Segment and classify a whole source text.
///
/// The output preserves source order; a recovered split contributes its
/// two tokens adjacently.
pub fn tokenize(automaton: &Automaton, source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for raw in segment(source) {
        tokens.extend(classify(automaton, &raw.text, raw.line));
    }
    tokens
}

/// The unrecognized tokens of a finished stream, in stream order.
pub fn lexical_errors(tokens: &[Token]) -> Vec<&Token> {
    tokens.iter().filter(|token| !token.recognized).collect()
}
