//! Shared output types for the Estra lexical classifier.
//!
//! The classifier consumes raw lexemes and produces [`Token`] records; the
//! downstream parser consumes them. Everything here is immutable data with
//! value semantics (`Clone, Eq, Hash, Debug`), so tokens can be collected,
//! compared in tests, and shared across threads freely.

mod category;
mod token;

pub use category::{KeywordClass, LexErrorKind, Symbol, TokenCategory};
pub use token::{StateLabel, Token};
