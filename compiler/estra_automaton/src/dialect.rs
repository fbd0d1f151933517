//! Dialect configuration: reserved words, category table, alphabet.
//!
//! A dialect is an explicit value handed to [`Automaton::build`] — there is
//! no global keyword table, so independent dialects can be built and tested
//! in isolation.
//!
//! Three kinds of entries:
//! 1. **Keywords** — reserved words that become automaton states *and*
//!    category-table entries. The common case.
//! 2. **Uncategorized reserved words** — automaton states with no category
//!    entry. A full match resolves to `UnknownReserved`, surfacing the
//!    configuration gap without failing the input.
//! 3. **Table-only entries** — category-table keys with no automaton
//!    states, resolved through the identifier-override table lookup (the
//!    built-in dialect uses this for the control words `IF` / `ELSE`).
//!
//! [`Automaton::build`]: crate::Automaton::build

use estra_ir::KeywordClass;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Configuration error raised while building an automaton.
///
/// These are programmer/configuration mistakes, not user input errors, so
/// they fail construction instead of producing unreachable transitions.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BuildError {
    /// A reserved word was the empty string.
    #[error("reserved word must not be empty")]
    EmptyWord,
    /// A reserved word uses a character outside the dialect alphabet.
    #[error("reserved word `{word}` uses `{ch}`, which is outside the dialect alphabet")]
    ForbiddenCharacter {
        /// The offending word (already case-folded).
        word: String,
        /// The character that is not in the alphabet.
        ch: char,
    },
}

/// Case-fold a lexeme to its uppercase form, one character per character.
///
/// # Invariant
///
/// The output has exactly as many `char`s as the input, so a character
/// index into the folded text is also a character index into the original.
/// The recovery split relies on this. (Plain `str::to_uppercase` does not
/// guarantee it: `ß` expands to `SS`.)
pub fn fold_upper(text: &str) -> String {
    text.chars().map(upper_char).collect()
}

/// Uppercase a single character, keeping exactly one output character.
fn upper_char(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Reserved-word inventory and category table for one DSL dialect.
#[derive(Clone, Debug, Default)]
pub struct Dialect {
    /// Words built into the automaton, with their optional category.
    keywords: Vec<(String, Option<KeywordClass>)>,
    /// Category-table entries with no automaton states.
    table_only: Vec<(String, KeywordClass)>,
    /// Characters allowed beyond `A-Z`, `0-9`, `_`.
    extra_alphabet: FxHashSet<char>,
}

impl Dialect {
    /// An empty dialect. Add entries with the builder methods.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reserved word with its semantic class.
    #[must_use]
    pub fn keyword(mut self, word: &str, class: KeywordClass) -> Self {
        self.keywords.push((fold_upper(word), Some(class)));
        self
    }

    /// Add a reserved word with no category entry.
    ///
    /// The automaton will accept it, and classification resolves it to the
    /// `UnknownReserved` category.
    #[must_use]
    pub fn reserved(mut self, word: &str) -> Self {
        self.keywords.push((fold_upper(word), None));
        self
    }

    /// Add a category-table entry with no automaton states.
    #[must_use]
    pub fn table_entry(mut self, word: &str, class: KeywordClass) -> Self {
        self.table_only.push((fold_upper(word), class));
        self
    }

    /// Allow an extra character in the reserved-word alphabet.
    #[must_use]
    pub fn extend_alphabet(mut self, ch: char) -> Self {
        self.extra_alphabet.insert(ch);
        self
    }

    /// Is `ch` part of this dialect's reserved-word alphabet?
    pub fn in_alphabet(&self, ch: char) -> bool {
        ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_' || self.extra_alphabet.contains(&ch)
    }

    /// Automaton words with their optional categories (case-folded).
    pub(crate) fn keywords(&self) -> &[(String, Option<KeywordClass>)] {
        &self.keywords
    }

    /// Table-only entries (case-folded).
    pub(crate) fn table_only(&self) -> &[(String, KeywordClass)] {
        &self.table_only
    }

    /// The built-in Estra dialect: the full reserved-word inventory of the
    /// data-structures DSL.
    pub fn estra() -> Self {
        use KeywordClass::{Action, Auxiliary, Control, Property, Structure};

        let mut dialect = Self::new().extend_alphabet('Ñ');

        // Structures
        for word in [
            "PILA",
            "PILA_CIRCULAR",
            "COLA",
            "BICOLAS",
            "LISTA_ENLAZADAS",
            "LISTA_DOBLE_ENLAZADA",
            "LISTA_CIRCULAR",
            "ARBOL_BINARIO",
            "TABLAS_HASH",
            "GRAFOS",
        ] {
            dialect = dialect.keyword(word, Structure);
        }

        // Actions: insertion, removal, lookup, traversal, maintenance
        for word in [
            "INSERTAR",
            "INSERTAR_FINAL",
            "INSERTAR_INICIO",
            "INSERTAR_EN_POSICION",
            "INSERTARIZQUIERDA",
            "INSERTARDERECHA",
            "AGREGARNODO",
            "APILAR",
            "ENCOLAR",
            "PUSH",
            "ENQUEUE",
            "ELIMINAR",
            "ELIMINAR_INICIO",
            "ELIMINAR_FINAL",
            "ELIMINAR_FRENTE",
            "ELIMINAR_POSICION",
            "ELIMINARNODO",
            "DESAPILAR",
            "POP",
            "DESENCOLAR",
            "DEQUEUE",
            "BUSCAR",
            "TOPE",
            "FRENTE",
            "VERFILA",
            "FRONT",
            "CLAVE",
            "RECORRER",
            "RECORRERADELANTE",
            "RECORRERATRAS",
            "PREORDEN",
            "INORDEN",
            "POSTORDEN",
            "RECORRIDOPORNIVELES",
            "ACTUALIZAR",
            "REHASH",
            "AGREGARARISTA",
            "ELIMINARARISTA",
            "VECINOS",
            "BFS",
            "DFS",
            "CAMINOCORTO",
        ] {
            dialect = dialect.keyword(word, Action);
        }

        // Properties
        for word in ["VACIAT", "LLENAT", "TAMAÑO", "ALTURA", "HOJAS", "NODOS"] {
            dialect = dialect.keyword(word, Property);
        }

        // Auxiliaries
        for word in ["EN", "CON", "VALOR"] {
            dialect = dialect.keyword(word, Auxiliary);
        }

        // Control
        dialect = dialect.keyword("MOSTRAR", Control);

        // Reserved but left out of the category table upstream; kept that
        // way so the UnknownReserved fallback stays exercised.
        dialect = dialect.reserved("PEEK");

        // Control words recognized through the category table only.
        dialect.table_entry("IF", Control).table_entry("ELSE", Control)
    }
}
