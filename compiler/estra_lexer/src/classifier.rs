//! The lexeme classifier.
//!
//! One lexeme in, one or two tokens out, in a fixed priority order:
//!
//! 1. Fast paths, no automaton walk: operator/delimiter table, then the
//!    signed-integer recognizer, then the string-literal recognizer.
//! 2. Case-fold and run the keyword automaton.
//! 3. Resolve the walk:
//!    - full match in an accepting state: keyword (or `UnknownReserved`
//!      when the category table has no entry);
//!    - identifier-shaped: identifier, unless the category table knows the
//!      folded word (table-only control words like `if`/`else`);
//!    - broken walk with an accepted prefix strictly before the last
//!      character: split into a recognized prefix token (keyword category,
//!      or generic identifier when the category table has no entry) and an
//!      unrecognized remainder;
//!    - otherwise a single unrecognized token.
//!
//! The identifier check deliberately precedes the split: `PILAZ` or
//! `ENTRADA` are ordinary identifiers, not a keyword followed by garbage.
//! The split only fires for lexemes that could never be identifiers, like
//! `PILA@` or `EN+3`.
//!
//! Classification is pure: same automaton, same lexeme, same tokens.

use estra_automaton::{fold_upper, Automaton};
use estra_ir::{LexErrorKind, StateLabel, Token, TokenCategory};
use smallvec::{smallvec, SmallVec};

use crate::{operators, recognizers};

/// Tokens produced from one lexeme. At most two: the keyword/remainder
/// pair of a recovered split.
pub type Classified = SmallVec<[Token; 2]>;

/// Classify one raw lexeme from source line `line` (1-based).
pub fn classify(automaton: &Automaton, lexeme: &str, line: u32) -> Classified {
    // Fast paths bypass the automaton entirely.
    if let Some(sym) = operators::lookup(lexeme) {
        return smallvec![Token::recognized(lexeme, line, TokenCategory::Symbol(sym))];
    }
    if recognizers::is_signed_int(lexeme) {
        return smallvec![Token::recognized(lexeme, line, TokenCategory::Int)];
    }
    if recognizers::is_string_literal(lexeme) {
        return smallvec![Token::recognized(lexeme, line, TokenCategory::Str)];
    }

    let folded = fold_upper(lexeme);
    let outcome = automaton.scan(&folded);

    // Full keyword match.
    if outcome.fully_matched && automaton.is_accepting(outcome.final_state) {
        let category = automaton
            .category(&folded)
            .map_or(TokenCategory::UnknownReserved, TokenCategory::Keyword);
        let state = StateLabel::state(automaton.label(outcome.final_state));
        return smallvec![Token::with_state(lexeme, line, category, state)];
    }

    // Identifier override, with a category-table lookup for the words the
    // table knows but the automaton does not.
    if recognizers::is_identifier(lexeme) {
        let token = match automaton.category(&folded) {
            Some(class) => Token::with_state(
                lexeme,
                line,
                TokenCategory::Keyword(class),
                StateLabel::state(folded),
            ),
            None => Token::recognized(lexeme, line, TokenCategory::Ident),
        };
        return smallvec![token];
    }

    // Partial-match recovery: a reserved word followed by something that
    // breaks it. The accepted prefix must end strictly before the last
    // character, so the remainder is never empty.
    if let Some(accepted) = outcome.last_accepted {
        if accepted.char_index + 1 < folded.chars().count() {
            // fold_upper is one char per char, so a char index into the
            // folded text is a char index into the original lexeme.
            let split = byte_offset_of_char(lexeme, accepted.char_index + 1);
            let (prefix, remainder) = lexeme.split_at(split);
            // An accepted prefix missing from the category table falls back
            // to a generic identifier, keeping its accepting-state label.
            let prefix_category = automaton
                .category(automaton.label(accepted.state))
                .map_or(TokenCategory::Ident, TokenCategory::Keyword);
            let state = StateLabel::state(automaton.label(accepted.state));
            return smallvec![
                Token::with_state(prefix, line, prefix_category, state),
                Token::unrecognized(remainder, line, error_category(remainder)),
            ];
        }
    }

    // Nothing matched; diagnose the whole lexeme.
    smallvec![Token::unrecognized(lexeme, line, error_category(lexeme))]
}

/// Map an unrecognized lexeme to its error kind, most specific first.
fn error_category(lexeme: &str) -> TokenCategory {
    let kind = if recognizers::is_unterminated_string(lexeme) {
        LexErrorKind::UnterminatedString
    } else if lexeme.chars().count() == 1 {
        // Split remainders can be a lone operator character (EN+ splits
        // into EN and +); those are malformed here, not invalid symbols.
        match operators::lookup(lexeme) {
            Some(_) => LexErrorKind::MalformedToken,
            None => LexErrorKind::InvalidSymbol,
        }
    } else {
        LexErrorKind::MalformedToken
    };
    TokenCategory::Error(kind)
}

/// Byte offset of the `char_index`-th character of `text`.
fn byte_offset_of_char(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(offset, _)| offset)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use estra_automaton::Dialect;
    use estra_ir::{KeywordClass, Symbol};
    use pretty_assertions::assert_eq;

    fn dfa() -> Automaton {
        Automaton::build(&Dialect::estra()).unwrap()
    }

    fn one(automaton: &Automaton, lexeme: &str) -> Token {
        let tokens = classify(automaton, lexeme, 1);
        assert_eq!(tokens.len(), 1, "expected one token for {lexeme:?}");
        tokens.into_iter().next().unwrap()
    }

    // === Fast paths ===

    #[test]
    fn operators_skip_the_automaton() {
        let dfa = dfa();
        let tok = one(&dfa, ";");
        assert_eq!(tok.category, TokenCategory::Symbol(Symbol::Semicolon));
        assert_eq!(tok.state, StateLabel::NotApplicable);
        assert!(tok.recognized);
    }

    #[test]
    fn integers_and_strings_are_fast_paths() {
        let dfa = dfa();
        assert_eq!(one(&dfa, "42").category, TokenCategory::Int);
        assert_eq!(one(&dfa, "-7").category, TokenCategory::Int);
        assert_eq!(one(&dfa, "\"hola\"").category, TokenCategory::Str);
    }

    #[test]
    fn fast_path_precedes_keyword_lookup() {
        // A lexeme that is both a valid operator and nothing else; the
        // order is observable because `-7` must be an integer, not a minus
        // followed by a malformed token.
        let dfa = dfa();
        let tokens = classify(&dfa, "-7", 1);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::Int);
    }

    // === Full keyword match ===

    #[test]
    fn keyword_reports_class_and_state() {
        let dfa = dfa();
        let tok = one(&dfa, "PILA");
        assert_eq!(
            tok.category,
            TokenCategory::Keyword(KeywordClass::Structure)
        );
        assert_eq!(tok.state.as_str(), Some("PILA"));
        assert!(tok.recognized);
    }

    #[test]
    fn keyword_match_is_case_insensitive_but_keeps_casing() {
        let dfa = dfa();
        let tok = one(&dfa, "insertar");
        assert_eq!(tok.lexeme, "insertar");
        assert_eq!(tok.category, TokenCategory::Keyword(KeywordClass::Action));
        assert_eq!(tok.state.as_str(), Some("INSERTAR"));
    }

    #[test]
    fn accented_keyword_matches() {
        let dfa = dfa();
        let tok = one(&dfa, "tamaño");
        assert_eq!(tok.category, TokenCategory::Keyword(KeywordClass::Property));
        assert_eq!(tok.state.as_str(), Some("TAMAÑO"));
    }

    #[test]
    fn reserved_word_without_category_is_unknown_reserved() {
        let dfa = dfa();
        let tok = one(&dfa, "PEEK");
        assert_eq!(tok.category, TokenCategory::UnknownReserved);
        assert_eq!(tok.state.as_str(), Some("PEEK"));
        assert!(tok.recognized);
        assert!(!tok.is_error());
    }

    // === Identifier override ===

    #[test]
    fn plain_identifier() {
        let dfa = dfa();
        let tok = one(&dfa, "miPila");
        assert_eq!(tok.category, TokenCategory::Ident);
        assert_eq!(tok.state, StateLabel::NotApplicable);
    }

    #[test]
    fn keyword_prefix_plus_identifier_tail_is_an_identifier() {
        // The broken automaton walk does not split identifier-shaped
        // lexemes; ENTRADA is not EN + TRADA.
        let dfa = dfa();
        assert_eq!(one(&dfa, "PILAZ").category, TokenCategory::Ident);
        assert_eq!(one(&dfa, "ENTRADA").category, TokenCategory::Ident);
    }

    #[test]
    fn table_only_control_words_resolve_via_the_table() {
        let dfa = dfa();
        let tok = one(&dfa, "if");
        assert_eq!(tok.category, TokenCategory::Keyword(KeywordClass::Control));
        assert_eq!(tok.state.as_str(), Some("IF"));

        let tok = one(&dfa, "ELSE");
        assert_eq!(tok.category, TokenCategory::Keyword(KeywordClass::Control));
    }

    // === Partial-match recovery ===

    #[test]
    fn keyword_followed_by_stray_symbol_splits() {
        let dfa = dfa();
        let tokens = classify(&dfa, "PILA@", 4);
        assert_eq!(tokens.len(), 2);

        assert_eq!(tokens[0].lexeme, "PILA");
        assert_eq!(
            tokens[0].category,
            TokenCategory::Keyword(KeywordClass::Structure)
        );
        assert_eq!(tokens[0].state.as_str(), Some("PILA"));
        assert!(tokens[0].recognized);

        assert_eq!(tokens[1].lexeme, "@");
        assert_eq!(
            tokens[1].category,
            TokenCategory::Error(LexErrorKind::InvalidSymbol)
        );
        assert!(!tokens[1].recognized);
        assert_eq!(tokens[1].line, 4);
    }

    #[test]
    fn split_keeps_original_casing_in_both_halves() {
        let dfa = dfa();
        let tokens = classify(&dfa, "pila@!", 1);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "pila");
        assert_eq!(tokens[0].state.as_str(), Some("PILA"));
        assert_eq!(tokens[1].lexeme, "@!");
        assert_eq!(
            tokens[1].category,
            TokenCategory::Error(LexErrorKind::MalformedToken)
        );
    }

    #[test]
    fn split_prefers_longest_accepted_prefix() {
        // INSERTAR is an interior prefix of INSERTAR_FINAL, so the walk
        // keeps going past the accept; the recorded prefix is still the
        // full INSERTAR when @ breaks it.
        let dfa = dfa();
        let tokens = classify(&dfa, "INSERTAR@", 1);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "INSERTAR");
        assert_eq!(tokens[1].lexeme, "@");
    }

    #[test]
    fn uncategorized_prefix_falls_back_to_identifier() {
        // PEEK is accepting but absent from the category table; as a split
        // prefix it degrades to a generic identifier, keeping its state.
        let dfa = dfa();
        let tokens = classify(&dfa, "PEEK@", 1);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "PEEK");
        assert_eq!(tokens[0].category, TokenCategory::Ident);
        assert_eq!(tokens[0].state.as_str(), Some("PEEK"));
        assert!(tokens[0].recognized);
        assert_eq!(
            tokens[1].category,
            TokenCategory::Error(LexErrorKind::InvalidSymbol)
        );
    }

    #[test]
    fn accented_prefix_splits_on_char_boundary() {
        // Ñ is multi-byte; the split index is a character index.
        let dfa = dfa();
        let tokens = classify(&dfa, "tamaño%", 1);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "tamaño");
        assert_eq!(tokens[1].lexeme, "%");
    }

    #[test]
    fn no_accepted_prefix_means_one_error_token() {
        // The walk breaks on the very first character, so there is no
        // prefix to recover and the lexeme is diagnosed whole.
        let dfa = dfa();
        let tokens = classify(&dfa, "@EN", 1);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_error());
        assert_eq!(tokens[0].lexeme, "@EN");
    }

    // === Error taxonomy ===

    #[test]
    fn unterminated_string_is_diagnosed() {
        let dfa = dfa();
        let tok = one(&dfa, "\"abierta");
        assert_eq!(
            tok.category,
            TokenCategory::Error(LexErrorKind::UnterminatedString)
        );
        assert!(!tok.recognized);
        assert_eq!(tok.state, StateLabel::NotApplicable);
    }

    #[test]
    fn stray_single_character_is_invalid_symbol() {
        let dfa = dfa();
        for lexeme in ["@", "#", "$", "%", "?"] {
            assert_eq!(
                one(&dfa, lexeme).category,
                TokenCategory::Error(LexErrorKind::InvalidSymbol),
                "for {lexeme:?}"
            );
        }
    }

    #[test]
    fn digit_led_word_is_malformed() {
        let dfa = dfa();
        let tok = one(&dfa, "234Inválido");
        assert_eq!(
            tok.category,
            TokenCategory::Error(LexErrorKind::MalformedToken)
        );
    }

    #[test]
    fn string_with_trailing_garbage_is_malformed_not_unterminated() {
        let dfa = dfa();
        let tok = one(&dfa, "\"doble\"x");
        assert_eq!(
            tok.category,
            TokenCategory::Error(LexErrorKind::MalformedToken)
        );
    }

    #[test]
    fn empty_lexeme_is_malformed() {
        // The segmenter never emits one, but the classifier still has a
        // defined answer.
        let dfa = dfa();
        let tok = one(&dfa, "");
        assert_eq!(
            tok.category,
            TokenCategory::Error(LexErrorKind::MalformedToken)
        );
    }

    // === Properties ===

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Classification is deterministic.
            #[test]
            fn classify_is_deterministic(lexeme in "[A-Za-z0-9_@#+\\-\"]{0,16}") {
                let dfa = dfa();
                prop_assert_eq!(
                    classify(&dfa, &lexeme, 1),
                    classify(&dfa, &lexeme, 1)
                );
            }

            /// Identifier-shaped lexemes never produce error tokens.
            #[test]
            fn identifiers_never_error(lexeme in "[A-Za-z_][A-Za-z0-9_]{0,15}") {
                let dfa = dfa();
                for token in classify(&dfa, &lexeme, 1) {
                    prop_assert!(!token.is_error(), "{:?} errored", token);
                }
            }

            /// A split always reconstructs the original lexeme.
            #[test]
            fn split_reconstructs_the_lexeme(lexeme in "[A-Za-z_@#%]{1,16}") {
                let dfa = dfa();
                let tokens = classify(&dfa, &lexeme, 1);
                let joined: String =
                    tokens.iter().map(|t| t.lexeme.as_str()).collect();
                prop_assert_eq!(joined, lexeme);
            }

            /// Every token carries the line it was classified with.
            #[test]
            fn line_number_is_preserved(lexeme in "[A-Za-z@]{1,8}", line in 1u32..10_000) {
                let dfa = dfa();
                for token in classify(&dfa, &lexeme, line) {
                    prop_assert_eq!(token.line, line);
                }
            }
        }
    }
}
