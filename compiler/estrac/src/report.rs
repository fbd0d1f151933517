//! Plain-text token table and error summary.

use estra_ir::Token;

const HEADERS: [&str; 5] = ["Lexeme", "Line", "Category", "State", "Recognized"];

/// Render the classified stream as an aligned five-column table.
pub fn render_table(tokens: &[Token]) -> String {
    let rows: Vec<[String; 5]> = tokens
        .iter()
        .map(|token| {
            [
                token.lexeme.clone(),
                token.line.to_string(),
                token.category.to_string(),
                token.state.to_string(),
                if token.recognized { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    // Column width is driven by the widest cell, headers included.
    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One line per unrecognized token, in stream order.
pub fn render_errors(errors: &[&Token]) -> String {
    errors
        .iter()
        .map(|token| {
            format!(
                "error[{}]: `{}` at line {}\n",
                token.category, token.lexeme, token.line
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;
    use estra_ir::{KeywordClass, LexErrorKind, StateLabel, TokenCategory};
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Token> {
        vec![
            Token::with_state(
                "PILA",
                1,
                TokenCategory::Keyword(KeywordClass::Structure),
                StateLabel::state("PILA"),
            ),
            Token::recognized("miPila", 1, TokenCategory::Ident),
            Token::unrecognized("@", 2, TokenCategory::Error(LexErrorKind::InvalidSymbol)),
        ]
    }

    #[test]
    fn table_has_header_rule_and_one_row_per_token() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Lexeme"));
        assert!(lines[1].starts_with("---"));
        assert!(lines[2].contains("PILA"));
        assert!(lines[2].contains("structure"));
        assert!(lines[3].contains("N/A"));
        assert!(lines[4].contains("no"));
    }

    #[test]
    fn columns_align_on_the_widest_cell() {
        let table = render_table(&sample());
        let lines: Vec<&str> = table.lines().collect();
        // "miPila" is the widest lexeme, so every row's first separator
        // sits at the same column.
        let sep_at = |line: &str| line.find('|').unwrap();
        assert_eq!(sep_at(lines[0]), sep_at(lines[2]));
        assert_eq!(sep_at(lines[0]), sep_at(lines[4]));
    }

    #[test]
    fn empty_stream_renders_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn error_summary_lists_each_error() {
        let tokens = sample();
        let errors: Vec<&Token> = tokens.iter().filter(|t| !t.recognized).collect();
        assert_eq!(
            render_errors(&errors),
            "error[error:invalid-symbol]: `@` at line 2\n"
        );
    }
}
