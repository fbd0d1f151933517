//! Auxiliary pattern recognizers.
//!
//! Each recognizer is a pure predicate over the raw (non-case-folded)
//! lexeme, written as an explicit tiny state machine rather than a pattern
//! library: the patterns are small and closed, and the machine form keeps
//! the accept/reject rules visible.
//!
//! Letters are Unicode-alphabetic, so `Inválido` and `señal` are
//! identifier-shaped.

/// Signed integer: optional leading `+`/`-`, then one or more ASCII
/// digits, nothing else.
pub fn is_signed_int(lexeme: &str) -> bool {
    enum State {
        Start,
        AfterSign,
        Digits,
    }

    let mut state = State::Start;
    for ch in lexeme.chars() {
        state = match state {
            State::Start => match ch {
                '+' | '-' => State::AfterSign,
                c if c.is_ascii_digit() => State::Digits,
                _ => return false,
            },
            State::AfterSign | State::Digits => {
                if ch.is_ascii_digit() {
                    State::Digits
                } else {
                    return false;
                }
            }
        };
    }
    matches!(state, State::Digits)
}

/// Where the string-literal machine ended up.
enum StrState {
    /// Empty input: never saw the opening quote.
    Start,
    /// Opened with `"`, closing quote not reached.
    Inside,
    /// Opened and closed, nothing after the closing quote.
    Closed,
    /// Anything else: no opening quote, or characters after the close.
    Rejected,
}

fn string_machine(lexeme: &str) -> StrState {
    let mut state = StrState::Start;
    for ch in lexeme.chars() {
        state = match state {
            StrState::Start => {
                if ch == '"' {
                    StrState::Inside
                } else {
                    return StrState::Rejected;
                }
            }
            StrState::Inside => {
                if ch == '"' {
                    StrState::Closed
                } else {
                    StrState::Inside
                }
            }
            StrState::Closed | StrState::Rejected => return StrState::Rejected,
        };
    }
    state
}

/// Quoted string literal: `"..."` with no characters after the close.
pub fn is_string_literal(lexeme: &str) -> bool {
    matches!(string_machine(lexeme), StrState::Closed)
}

/// The "opened but never closed" diagnosis: the lexeme starts a string
/// literal and runs out of characters before the closing quote.
pub fn is_unterminated_string(lexeme: &str) -> bool {
    matches!(string_machine(lexeme), StrState::Inside)
}

/// Generic identifier: letter or underscore, then letters, digits, or
/// underscores; at least one character.
pub fn is_identifier(lexeme: &str) -> bool {
    enum State {
        Start,
        Body,
    }

    let mut state = State::Start;
    for ch in lexeme.chars() {
        state = match state {
            State::Start => {
                if ch.is_alphabetic() || ch == '_' {
                    State::Body
                } else {
                    return false;
                }
            }
            State::Body => {
                if ch.is_alphanumeric() || ch == '_' {
                    State::Body
                } else {
                    return false;
                }
            }
        };
    }
    matches!(state, State::Body)
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Signed integers ===

    #[test]
    fn integers_accept() {
        assert!(is_signed_int("0"));
        assert!(is_signed_int("42"));
        assert!(is_signed_int("+300"));
        assert!(is_signed_int("-7"));
        assert!(is_signed_int("007"));
    }

    #[test]
    fn integers_reject() {
        assert!(!is_signed_int(""));
        assert!(!is_signed_int("+"));
        assert!(!is_signed_int("-"));
        assert!(!is_signed_int("+-1"));
        assert!(!is_signed_int("1.5"));
        assert!(!is_signed_int("234X"));
        assert!(!is_signed_int("x234"));
        assert!(!is_signed_int("4 2"));
    }

    // === String literals ===

    #[test]
    fn strings_accept() {
        assert!(is_string_literal("\"\""));
        assert!(is_string_literal("\"hola\""));
        assert!(is_string_literal("\"pila vacía\""));
    }

    #[test]
    fn strings_reject() {
        assert!(!is_string_literal(""));
        assert!(!is_string_literal("hola"));
        assert!(!is_string_literal("\"abierta"));
        assert!(!is_string_literal("\"doble\"x"));
        assert!(!is_string_literal("x\"tarde\""));
    }

    #[test]
    fn unterminated_means_opened_and_never_closed() {
        assert!(is_unterminated_string("\""));
        assert!(is_unterminated_string("\"abierta"));
        // Closed-then-trailing is rejected, but it is not "unterminated".
        assert!(!is_unterminated_string("\"doble\"x"));
        assert!(!is_unterminated_string("sin comilla"));
        assert!(!is_unterminated_string(""));
    }

    // === Identifiers ===

    #[test]
    fn identifiers_accept() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp"));
        assert!(is_identifier("miPila"));
        assert!(is_identifier("nodo_2"));
        assert!(is_identifier("Inválido"));
    }

    #[test]
    fn identifiers_reject() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("mi pila"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("\"x\""));
    }
}
