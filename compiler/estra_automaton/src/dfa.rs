//! Prefix-compressed keyword DFA.
//!
//! States are interned to compact integer ids at build time; the prefix
//! strings are kept only as diagnostic labels. Using the prefix itself as
//! the state identity during interning means words sharing a prefix share
//! states and transitions with no explicit merge step, and the transition
//! table is deterministic by construction: a given (state, character) pair
//! always interns to the same destination prefix.

use estra_ir::KeywordClass;
use rustc_hash::FxHashMap;

use crate::dialect::{BuildError, Dialect};

/// Compact id of an automaton state.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The synthetic start state. Not associated with any prefix, so it
    /// never collides with an empty-string state.
    pub const START: StateId = StateId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Diagnostic label of the start state.
const START_LABEL: &str = "START";

/// The position and state of the last accepting prefix seen during a scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AcceptedPrefix {
    /// Character index (not byte index) of the last character of the
    /// accepted prefix.
    pub char_index: usize,
    /// The accepting state reached at that character.
    pub state: StateId,
}

/// Result of running a case-folded lexeme through the automaton.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanOutcome {
    /// `true` if every character had a valid transition.
    pub fully_matched: bool,
    /// The state the scan stopped in (the start state for an empty input,
    /// or the last good state when a character had no transition).
    pub final_state: StateId,
    /// Last accepting position seen, kept even after the walk breaks.
    pub last_accepted: Option<AcceptedPrefix>,
}

/// Immutable keyword-recognition automaton built from a [`Dialect`].
#[derive(Clone, Debug)]
pub struct Automaton {
    /// Prefix label per state; `labels[0]` is the start sentinel.
    labels: Vec<String>,
    /// One transition row per state.
    transitions: Vec<FxHashMap<char, StateId>>,
    /// Accepting flag per state.
    accepting: Vec<bool>,
    /// Keyword category table: case-folded word to semantic class. Holds
    /// both automaton words and table-only entries.
    categories: FxHashMap<String, KeywordClass>,
}

impl Automaton {
    /// Build the automaton for a dialect, validating every reserved word
    /// against the dialect alphabet (fail-fast on configuration errors).
    pub fn build(dialect: &Dialect) -> Result<Automaton, BuildError> {
        let mut labels = vec![START_LABEL.to_string()];
        let mut transitions: Vec<FxHashMap<char, StateId>> = vec![FxHashMap::default()];
        let mut accepting = vec![false];
        let mut interned: FxHashMap<String, StateId> = FxHashMap::default();

        for (word, _) in dialect.keywords() {
            if word.is_empty() {
                return Err(BuildError::EmptyWord);
            }
            if let Some(ch) = word.chars().find(|&ch| !dialect.in_alphabet(ch)) {
                return Err(BuildError::ForbiddenCharacter {
                    word: word.clone(),
                    ch,
                });
            }

            let mut state = StateId::START;
            let mut prefix = String::new();
            for ch in word.chars() {
                prefix.push(ch);
                let next = match interned.get(prefix.as_str()) {
                    Some(&id) => id,
                    None => {
                        #[allow(
                            clippy::cast_possible_truncation,
                            reason = "state count is bounded by the total reserved-word length"
                        )]
                        let id = StateId(labels.len() as u32);
                        interned.insert(prefix.clone(), id);
                        labels.push(prefix.clone());
                        transitions.push(FxHashMap::default());
                        accepting.push(false);
                        id
                    }
                };
                transitions[state.index()].insert(ch, next);
                state = next;
            }
            accepting[state.index()] = true;
        }

        let mut categories = FxHashMap::default();
        for (word, class) in dialect.keywords() {
            if let Some(class) = class {
                categories.insert(word.clone(), *class);
            }
        }
        for (word, class) in dialect.table_only() {
            categories.insert(word.clone(), *class);
        }

        Ok(Automaton {
            labels,
            transitions,
            accepting,
            categories,
        })
    }

    /// Run a case-folded lexeme through the automaton from the start state.
    ///
    /// Stops at the first character with no transition, recording
    /// `fully_matched = false` but keeping whatever accepting position was
    /// already seen. Linear in the input length.
    pub fn scan(&self, folded: &str) -> ScanOutcome {
        let mut state = StateId::START;
        let mut fully_matched = true;
        let mut last_accepted = None;

        for (char_index, ch) in folded.chars().enumerate() {
            match self.transitions[state.index()].get(&ch) {
                Some(&next) => {
                    state = next;
                    if self.accepting[state.index()] {
                        last_accepted = Some(AcceptedPrefix { char_index, state });
                    }
                }
                None => {
                    fully_matched = false;
                    break;
                }
            }
        }

        ScanOutcome {
            fully_matched,
            final_state: state,
            last_accepted,
        }
    }

    /// Is this state in the accepting set?
    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state.index()]
    }

    /// Diagnostic label of a state (its prefix, or the start sentinel).
    #[inline]
    pub fn label(&self, state: StateId) -> &str {
        &self.labels[state.index()]
    }

    /// Category-table lookup for a case-folded word.
    pub fn category(&self, folded_word: &str) -> Option<KeywordClass> {
        self.categories.get(folded_word).copied()
    }

    /// Number of states, including the start sentinel.
    pub fn state_count(&self) -> usize {
        self.labels.len()
    }

    /// The state a case-folded prefix reaches, if the whole prefix has
    /// valid transitions. The empty prefix reaches the start state.
    pub fn state_of_prefix(&self, folded_prefix: &str) -> Option<StateId> {
        let outcome = self.scan(folded_prefix);
        outcome.fully_matched.then_some(outcome.final_state)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use estra_ir::KeywordClass;
    use pretty_assertions::assert_eq;

    fn tiny() -> Automaton {
        // The PILA/PILAR pair exercises an accepting state that is also an
        // interior prefix of a longer word.
        let dialect = Dialect::new()
            .keyword("PILA", KeywordClass::Structure)
            .keyword("PILAR", KeywordClass::Action)
            .keyword("EN", KeywordClass::Auxiliary);
        Automaton::build(&dialect).unwrap()
    }

    // === Construction ===

    #[test]
    fn state_count_equals_distinct_prefixes_plus_start() {
        // Prefixes: P, PI, PIL, PILA, PILAR, E, EN — plus START.
        assert_eq!(tiny().state_count(), 8);
    }

    #[test]
    fn shared_prefix_is_one_state() {
        let dfa = tiny();
        // The state PILA reaches as a word of its own is the same state the
        // PILAZ walk records before breaking on Z.
        let via_word = dfa.state_of_prefix("PILA").unwrap();
        let via_broken_walk = dfa.scan("PILAZ").last_accepted.unwrap().state;
        assert_eq!(via_word, via_broken_walk);
    }

    #[test]
    fn interior_prefix_is_not_accepting() {
        let dfa = tiny();
        let pil = dfa.state_of_prefix("PIL").unwrap();
        assert!(!dfa.is_accepting(pil));
        assert_eq!(dfa.label(pil), "PIL");
    }

    #[test]
    fn full_words_are_accepting() {
        let dfa = tiny();
        for word in ["PILA", "PILAR", "EN"] {
            let state = dfa.state_of_prefix(word).unwrap();
            assert!(dfa.is_accepting(state), "{word} should be accepting");
        }
    }

    #[test]
    fn start_state_has_sentinel_label() {
        let dfa = tiny();
        assert_eq!(dfa.label(StateId::START), "START");
        assert!(!dfa.is_accepting(StateId::START));
    }

    #[test]
    fn duplicate_words_are_idempotent() {
        let once = Automaton::build(&Dialect::new().keyword("POP", KeywordClass::Action)).unwrap();
        let twice = Automaton::build(
            &Dialect::new()
                .keyword("POP", KeywordClass::Action)
                .keyword("POP", KeywordClass::Action),
        )
        .unwrap();
        assert_eq!(once.state_count(), twice.state_count());
    }

    // === Build-time validation ===

    #[test]
    fn empty_word_is_rejected() {
        let err = Automaton::build(&Dialect::new().keyword("", KeywordClass::Action)).unwrap_err();
        assert_eq!(err, BuildError::EmptyWord);
    }

    #[test]
    fn out_of_alphabet_word_is_rejected() {
        let err =
            Automaton::build(&Dialect::new().keyword("TAMAÑO", KeywordClass::Property)).unwrap_err();
        assert_eq!(
            err,
            BuildError::ForbiddenCharacter {
                word: "TAMAÑO".to_string(),
                ch: 'Ñ',
            }
        );
    }

    #[test]
    fn extended_alphabet_admits_the_word() {
        let dialect = Dialect::new()
            .extend_alphabet('Ñ')
            .keyword("TAMAÑO", KeywordClass::Property);
        let dfa = Automaton::build(&dialect).unwrap();
        assert!(dfa.scan("TAMAÑO").fully_matched);
    }

    // === Scanning ===

    #[test]
    fn scan_full_word() {
        let dfa = tiny();
        let outcome = dfa.scan("PILA");
        assert!(outcome.fully_matched);
        assert!(dfa.is_accepting(outcome.final_state));
        assert_eq!(dfa.label(outcome.final_state), "PILA");
        let accepted = outcome.last_accepted.unwrap();
        assert_eq!(accepted.char_index, 3);
    }

    #[test]
    fn scan_longer_word_distinguished_from_prefix() {
        let dfa = tiny();
        let outcome = dfa.scan("PILAR");
        assert!(outcome.fully_matched);
        assert_eq!(dfa.label(outcome.final_state), "PILAR");
        // last_accepted is the full word, not the interior PILA.
        assert_eq!(outcome.last_accepted.unwrap().char_index, 4);
    }

    #[test]
    fn scan_breaks_and_keeps_last_accepted() {
        let dfa = tiny();
        let outcome = dfa.scan("PILA@");
        assert!(!outcome.fully_matched);
        let accepted = outcome.last_accepted.unwrap();
        assert_eq!(accepted.char_index, 3);
        assert_eq!(dfa.label(accepted.state), "PILA");
    }

    #[test]
    fn scan_break_with_no_accepting_prefix() {
        let dfa = tiny();
        let outcome = dfa.scan("PIX");
        assert!(!outcome.fully_matched);
        assert_eq!(outcome.last_accepted, None);
        // The walk stopped in the last good state.
        assert_eq!(dfa.label(outcome.final_state), "PI");
    }

    #[test]
    fn scan_empty_input_stays_at_start() {
        let dfa = tiny();
        let outcome = dfa.scan("");
        assert!(outcome.fully_matched);
        assert_eq!(outcome.final_state, StateId::START);
        assert_eq!(outcome.last_accepted, None);
    }

    #[test]
    fn scan_interior_word_not_accepting_at_end() {
        // Full transitions but a non-accepting final state.
        let dfa = tiny();
        let outcome = dfa.scan("PIL");
        assert!(outcome.fully_matched);
        assert!(!dfa.is_accepting(outcome.final_state));
        assert_eq!(outcome.last_accepted, None);
    }

    // === Category table ===

    #[test]
    fn categories_resolve_per_dialect() {
        let dfa = tiny();
        assert_eq!(dfa.category("PILA"), Some(KeywordClass::Structure));
        assert_eq!(dfa.category("PILAR"), Some(KeywordClass::Action));
        assert_eq!(dfa.category("EN"), Some(KeywordClass::Auxiliary));
        assert_eq!(dfa.category("NOPE"), None);
    }

    #[test]
    fn uncategorized_reserved_word_is_accepting_without_category() {
        let dfa = Automaton::build(&Dialect::new().reserved("PEEK")).unwrap();
        assert!(dfa.scan("PEEK").fully_matched);
        let state = dfa.state_of_prefix("PEEK").unwrap();
        assert!(dfa.is_accepting(state));
        assert_eq!(dfa.category("PEEK"), None);
    }

    #[test]
    fn table_only_entry_has_no_states() {
        let dfa = Automaton::build(&Dialect::new().table_entry("IF", KeywordClass::Control))
            .unwrap();
        assert_eq!(dfa.category("IF"), Some(KeywordClass::Control));
        assert_eq!(dfa.state_of_prefix("IF"), None);
        assert_eq!(dfa.state_count(), 1); // start only
    }

    // === Built-in dialect ===

    #[test]
    fn estra_dialect_builds() {
        let dfa = Automaton::build(&Dialect::estra()).unwrap();
        assert!(dfa.scan("TAMAÑO").fully_matched);
        assert!(dfa.scan("RECORRIDOPORNIVELES").fully_matched);
        assert_eq!(dfa.category("MOSTRAR"), Some(KeywordClass::Control));
    }

    // === Properties ===

    mod properties {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;

        /// Every reserved word of the built-in dialect fully matches and
        /// lands in an accepting state with its own label.
        #[test]
        fn full_match_soundness_for_every_dialect_word() {
            let dialect = Dialect::estra();
            let dfa = Automaton::build(&dialect).unwrap();
            for (word, _) in dialect.keywords() {
                let outcome = dfa.scan(word);
                assert!(outcome.fully_matched, "{word} did not fully match");
                assert!(
                    dfa.is_accepting(outcome.final_state),
                    "{word} not accepting"
                );
                assert_eq!(dfa.label(outcome.final_state), word);
            }
        }

        /// Prefix compression: every proper prefix of every word reaches
        /// exactly one state, and the state count equals the number of
        /// distinct prefixes plus the start sentinel.
        #[test]
        fn prefix_compression_over_the_dialect() {
            let dialect = Dialect::estra();
            let dfa = Automaton::build(&dialect).unwrap();

            let mut prefixes = rustc_hash::FxHashSet::default();
            for (word, _) in dialect.keywords() {
                let chars: Vec<char> = word.chars().collect();
                for len in 1..=chars.len() {
                    prefixes.insert(chars[..len].iter().collect::<String>());
                }
            }
            assert_eq!(dfa.state_count(), prefixes.len() + 1);

            for prefix in &prefixes {
                assert!(
                    dfa.state_of_prefix(prefix).is_some(),
                    "prefix {prefix} unreachable"
                );
            }
        }

        proptest! {
            /// Scanning is deterministic: same input, same outcome.
            #[test]
            fn scan_is_deterministic(input in "[A-Z_0-9]{0,24}") {
                let dfa = Automaton::build(&Dialect::estra()).unwrap();
                prop_assert_eq!(dfa.scan(&input), dfa.scan(&input));
            }

            /// A recorded accepting prefix is always a reserved word.
            #[test]
            fn last_accepted_is_a_real_word(input in "[A-Z_]{1,24}") {
                let dialect = Dialect::estra();
                let dfa = Automaton::build(&dialect).unwrap();
                if let Some(accepted) = dfa.scan(&input).last_accepted {
                    let label = dfa.label(accepted.state).to_string();
                    prop_assert!(
                        dialect.keywords().iter().any(|(word, _)| *word == label),
                        "accepted label {} is not a reserved word", label
                    );
                }
            }
        }
    }
}
