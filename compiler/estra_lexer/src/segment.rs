//! Line-oriented segmentation: raw source text to raw lexemes.
//!
//! Segmentation runs before classification and stays deliberately dumb:
//! it splits on whitespace, isolates punctuation (pairing the two-character
//! operators), captures quoted literals as single lexemes, and strips `//`
//! line comments. Everything else accumulates into a word, which is how a
//! glued error like `pila@` or `234Inválido` survives to the classifier as
//! one lexeme instead of being laundered here.
//!
//! Lines are counted 1-based; every lexeme carries the line it started on.

/// A raw lexeme with its 1-based source line, before classification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawLexeme {
    /// Lexeme text, original casing.
    pub text: String,
    /// 1-based line number.
    pub line: u32,
}

/// Split source text into raw lexemes.
pub fn segment(source: &str) -> Vec<RawLexeme> {
    let mut out = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = u32::try_from(index + 1).unwrap_or(u32::MAX);
        segment_line(text, line, &mut out);
    }
    out
}

/// Characters that always end the current word and stand alone (or pair
/// into a two-character operator).
fn is_punct(ch: char) -> bool {
    matches!(
        ch,
        ';' | '(' | ')' | '[' | ']' | '{' | '}' | ',' | '=' | '+' | '-' | '*' | '/' | '<' | '>'
            | '.' | '!' | '&' | '|'
    )
}

fn segment_line(text: &str, line: u32, out: &mut Vec<RawLexeme>) {
    let mut chars = text.chars().peekable();
    let mut word = String::new();

    while let Some(ch) = chars.next() {
        // Line comment: drop the rest of the line.
        if ch == '/' && chars.peek() == Some(&'/') {
            flush(&mut word, line, out);
            return;
        }

        if ch.is_whitespace() {
            flush(&mut word, line, out);
            continue;
        }

        // A quoted literal is one lexeme through the closing quote; an
        // unterminated one runs to the end of the line and is diagnosed
        // downstream.
        if ch == '"' {
            flush(&mut word, line, out);
            let mut literal = String::from('"');
            for next in chars.by_ref() {
                literal.push(next);
                if next == '"' {
                    break;
                }
            }
            out.push(RawLexeme {
                text: literal,
                line,
            });
            continue;
        }

        if is_punct(ch) {
            flush(&mut word, line, out);
            let compound = matches!(
                (ch, chars.peek()),
                ('=', Some('='))
                    | ('!', Some('='))
                    | ('<', Some('='))
                    | ('>', Some('='))
                    | ('&', Some('&'))
                    | ('|', Some('|'))
            );
            let mut text = String::from(ch);
            if compound {
                if let Some(second) = chars.next() {
                    text.push(second);
                }
            }
            out.push(RawLexeme { text, line });
            continue;
        }

        word.push(ch);
    }
    flush(&mut word, line, out);
}

fn flush(word: &mut String, line: u32, out: &mut Vec<RawLexeme>) {
    if !word.is_empty() {
        out.push(RawLexeme {
            text: std::mem::take(word),
            line,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(source: &str) -> Vec<String> {
        segment(source).into_iter().map(|raw| raw.text).collect()
    }

    // === Words and whitespace ===

    #[test]
    fn whitespace_separates_words() {
        assert_eq!(texts("PILA miPila  CON\t5"), ["PILA", "miPila", "CON", "5"]);
    }

    #[test]
    fn lines_are_one_based() {
        let raw = segment("PILA\n\nCOLA");
        assert_eq!(raw[0], RawLexeme { text: "PILA".into(), line: 1 });
        assert_eq!(raw[1], RawLexeme { text: "COLA".into(), line: 3 });
    }

    // === Punctuation ===

    #[test]
    fn punctuation_is_isolated() {
        assert_eq!(texts("INSERTAR(5);"), ["INSERTAR", "(", "5", ")", ";"]);
        assert_eq!(texts("a=b"), ["a", "=", "b"]);
    }

    #[test]
    fn two_char_operators_stay_paired() {
        assert_eq!(texts("a==b"), ["a", "==", "b"]);
        assert_eq!(texts("a!=b"), ["a", "!=", "b"]);
        assert_eq!(texts("a<=b>=c"), ["a", "<=", "b", ">=", "c"]);
        assert_eq!(texts("a&&b||c"), ["a", "&&", "b", "||", "c"]);
    }

    #[test]
    fn lone_halves_are_emitted_alone() {
        // ! & | without their pair still come out as single lexemes; the
        // classifier rejects them.
        assert_eq!(texts("a!b"), ["a", "!", "b"]);
        assert_eq!(texts("a&b"), ["a", "&", "b"]);
        assert_eq!(texts("= ="), ["=", "="]);
    }

    #[test]
    fn triple_equals_is_pair_then_single() {
        assert_eq!(texts("a===b"), ["a", "==", "=", "b"]);
    }

    // === Comments ===

    #[test]
    fn line_comment_is_stripped() {
        assert_eq!(texts("PILA // crea la pila"), ["PILA"]);
        assert_eq!(texts("// solo comentario"), Vec::<String>::new());
    }

    #[test]
    fn comment_flushes_the_pending_word() {
        assert_eq!(texts("PILA// pegado"), ["PILA"]);
    }

    #[test]
    fn single_slash_is_division() {
        assert_eq!(texts("a / b"), ["a", "/", "b"]);
    }

    // === String literals ===

    #[test]
    fn quoted_literal_is_one_lexeme() {
        assert_eq!(
            texts("MOSTRAR \"pila vacía\";"),
            ["MOSTRAR", "\"pila vacía\"", ";"]
        );
    }

    #[test]
    fn literal_may_contain_punctuation_and_slashes() {
        assert_eq!(texts("\"a; // (b)\""), ["\"a; // (b)\""]);
    }

    #[test]
    fn unterminated_literal_runs_to_end_of_line() {
        assert_eq!(texts("MOSTRAR \"abierta\nPILA"), ["MOSTRAR", "\"abierta", "PILA"]);
        let raw = segment("MOSTRAR \"abierta\nPILA");
        assert_eq!(raw[1].line, 1);
        assert_eq!(raw[2].line, 2);
    }

    // === Glued errors survive ===

    #[test]
    fn non_punct_garbage_stays_glued_to_the_word() {
        assert_eq!(texts("pila@ 234Inválido"), ["pila@", "234Inválido"]);
    }
}
