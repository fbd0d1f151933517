//! End-to-end pipeline tests: source text in, classified token stream out.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use estra_automaton::{Automaton, Dialect};
use estra_ir::{KeywordClass, LexErrorKind, Symbol, Token, TokenCategory};
use estra_lexer::{lexical_errors, tokenize};
use pretty_assertions::assert_eq;

fn dfa() -> Automaton {
    Automaton::build(&Dialect::estra()).expect("built-in dialect builds")
}

fn categories(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.category.to_string()).collect()
}

#[test]
fn clean_program_has_no_errors() {
    let source = "\
PILA miPila;
APILAR 5 EN miPila; // push
APILAR 20 EN miPila;
MOSTRAR \"listo\";
";
    let tokens = tokenize(&dfa(), source);
    assert!(lexical_errors(&tokens).is_empty());

    assert_eq!(
        categories(&tokens),
        [
            "structure", "identifier", "semicolon", // PILA miPila;
            "action", "int-literal", "auxiliary", "identifier", "semicolon",
            "action", "int-literal", "auxiliary", "identifier", "semicolon",
            "control", "str-literal", "semicolon",
        ]
    );
}

#[test]
fn token_lines_track_the_source() {
    let tokens = tokenize(&dfa(), "PILA p;\n\nDESAPILAR EN p;");
    let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 1, 1, 3, 3, 3, 3]);
}

#[test]
fn keyword_matching_ignores_case_everywhere() {
    let tokens = tokenize(&dfa(), "cola c; encolar 9 en c;");
    assert_eq!(
        categories(&tokens),
        [
            "structure", "identifier", "semicolon",
            "action", "int-literal", "auxiliary", "identifier", "semicolon",
        ]
    );
    // Original casing survives, the state label is the folded word.
    assert_eq!(tokens[0].lexeme, "cola");
    assert_eq!(tokens[0].state.as_str(), Some("COLA"));
}

#[test]
fn accented_keywords_flow_through() {
    let tokens = tokenize(&dfa(), "TAMAÑO EN arbol;");
    assert_eq!(
        tokens[0].category,
        TokenCategory::Keyword(KeywordClass::Property)
    );
}

#[test]
fn control_words_from_both_tables() {
    // MOSTRAR is an automaton word; if/else resolve through the category
    // table alone.
    let tokens = tokenize(&dfa(), "if (x) { MOSTRAR \"sí\"; } else { }");
    assert_eq!(
        tokens[0].category,
        TokenCategory::Keyword(KeywordClass::Control)
    );
    let else_tok = tokens.iter().find(|t| t.lexeme == "else").unwrap();
    assert_eq!(
        else_tok.category,
        TokenCategory::Keyword(KeywordClass::Control)
    );
}

#[test]
fn comparison_operators_pair_up() {
    let tokens = tokenize(&dfa(), "if (a <= b && c != d)");
    let symbols: Vec<&Token> = tokens
        .iter()
        .filter(|t| matches!(t.category, TokenCategory::Symbol(_)))
        .collect();
    assert_eq!(symbols[0].category, TokenCategory::Symbol(Symbol::LParen));
    assert_eq!(symbols[1].category, TokenCategory::Symbol(Symbol::LtEq));
    assert_eq!(symbols[2].category, TokenCategory::Symbol(Symbol::AndAnd));
    assert_eq!(symbols[3].category, TokenCategory::Symbol(Symbol::NotEq));
    assert_eq!(symbols[4].category, TokenCategory::Symbol(Symbol::RParen));
}

#[test]
fn errors_are_recovered_in_stream_order() {
    let source = "\
PILA p;
pila@ x
MOSTRAR \"abierta
234Inválido;
";
    let tokens = tokenize(&dfa(), source);

    // The stream keeps going after every error.
    let errors = lexical_errors(&tokens);
    assert_eq!(errors.len(), 3);

    // pila@ recovers as a structure keyword plus an invalid symbol.
    assert_eq!(errors[0].lexeme, "@");
    assert_eq!(
        errors[0].category,
        TokenCategory::Error(LexErrorKind::InvalidSymbol)
    );
    assert_eq!(errors[0].line, 2);
    let pila = tokens.iter().find(|t| t.lexeme == "pila").unwrap();
    assert_eq!(
        pila.category,
        TokenCategory::Keyword(KeywordClass::Structure)
    );
    assert!(pila.recognized);

    assert_eq!(errors[1].lexeme, "\"abierta");
    assert_eq!(
        errors[1].category,
        TokenCategory::Error(LexErrorKind::UnterminatedString)
    );
    assert_eq!(errors[1].line, 3);

    assert_eq!(errors[2].lexeme, "234Inválido");
    assert_eq!(
        errors[2].category,
        TokenCategory::Error(LexErrorKind::MalformedToken)
    );
    assert_eq!(errors[2].line, 4);

    // The trailing semicolon after the malformed word is still recognized.
    let last = tokens.last().unwrap();
    assert_eq!(last.category, TokenCategory::Symbol(Symbol::Semicolon));
    assert!(last.recognized);
}

#[test]
fn uncategorized_reserved_word_is_flagged_not_errored() {
    let tokens = tokenize(&dfa(), "PEEK EN p;");
    assert_eq!(tokens[0].category, TokenCategory::UnknownReserved);
    assert!(tokens[0].recognized);
    assert!(lexical_errors(&tokens).is_empty());
}

#[test]
fn identifier_shaped_lexemes_are_never_split() {
    // Keyword-prefixed identifiers stay whole.
    let tokens = tokenize(&dfa(), "PILAZ ENTRADA pushear");
    assert_eq!(
        categories(&tokens),
        ["identifier", "identifier", "identifier"]
    );
}

#[test]
fn tokenize_is_deterministic() {
    let dfa = dfa();
    let source = "GRAFOS g; AGREGARARISTA 1 , 2 EN g; BFS EN g; pila@";
    assert_eq!(tokenize(&dfa, source), tokenize(&dfa, source));
}

#[test]
fn larger_program_across_structures() {
    let source = "\
// programa de prueba
PILA p;
APILAR 10 EN p;
APILAR 20 EN p;
DESAPILAR EN p;
COLA c;
ENCOLAR 1 EN c;
DESENCOLAR EN c;
ARBOL_BINARIO t;
INSERTAR 5 EN t;
INORDEN EN t;
ALTURA EN t;
TABLAS_HASH h;
INSERTAR CLAVE 3 VALOR \"tres\" EN h;
REHASH EN h;
MOSTRAR \"fin\";
";
    let tokens = tokenize(&dfa(), source);
    assert!(lexical_errors(&tokens).is_empty());

    let keyword_count = tokens
        .iter()
        .filter(|t| matches!(t.category, TokenCategory::Keyword(_)))
        .count();
    assert_eq!(keyword_count, 27);

    // First lexeme of the program is on line 2: the comment line yields
    // nothing.
    assert_eq!(tokens[0].line, 2);
}
