//! Splitting code lines into statements.

use crate::comment::QuoteScanner;

/// Split a comment-free line into statements.
///
/// Statements end at `;` (which is dropped) and after `{`; every `}` forms a
/// statement of its own. Separators inside quotes are ignored. Blank pieces
/// are discarded; they never carry braces.
pub(crate) fn split_statements(code: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut scanner = QuoteScanner::default();
    let mut start = 0;

    for (idx, ch) in code.char_indices() {
        if scanner.feed(ch) {
            continue;
        }
        match ch {
            ';' => {
                statements.push(&code[start..idx]);
                start = idx + 1;
            }
            '{' => {
                statements.push(&code[start..=idx]);
                start = idx + 1;
            }
            '}' => {
                statements.push(&code[start..idx]);
                statements.push(&code[idx..=idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    statements.push(&code[start..]);

    statements.retain(|statement| !statement.trim().is_empty());
    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(code: &str) -> Vec<&str> {
        split_statements(code).into_iter().map(str::trim).collect()
    }

    #[test]
    fn test_single_statement() {
        assert_eq!(trimmed("part a : B;"), ["part a : B"]);
    }

    #[test]
    fn test_one_line_package() {
        assert_eq!(
            trimmed("package P { part A : B; connect A to C; }"),
            ["package P {", "part A : B", "connect A to C", "}"]
        );
    }

    #[test]
    fn test_closing_braces_split() {
        assert_eq!(trimmed("}}"), ["}", "}"]);
    }

    #[test]
    fn test_separators_in_quotes() {
        assert_eq!(trimmed(r#"part 'a;b' : "{T}";"#), [r#"part 'a;b' : "{T}""#]);
    }

    #[test]
    fn test_blank_line() {
        assert!(split_statements("   ").is_empty());
    }
}
