//! Keyword-recognition automaton for the Estra DSL.
//!
//! A [`Dialect`] declares the reserved-word inventory and its category
//! table; [`Automaton::build`] derives the full state set (every distinct
//! prefix of every reserved word plus a synthetic start state) and the
//! deterministic transition table. Words sharing a prefix share the states
//! for that prefix — the automaton is prefix-compressed, not one chain per
//! word.
//!
//! Construction is the only fallible step: a reserved word that is empty
//! or uses a character outside the dialect alphabet is a configuration
//! error and is rejected fail-fast with a [`BuildError`]. The built
//! automaton is immutable and can be shared freely; [`Automaton::scan`] is
//! a pure function of its input.

mod dfa;
mod dialect;

pub use dfa::{AcceptedPrefix, Automaton, ScanOutcome, StateId};
pub use dialect::{fold_upper, BuildError, Dialect};
