//! Comment handling and quote-aware line scanning.

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

/// Remove every `/* ... */` comment, including ones spanning several lines.
///
/// This runs before line splitting so that braces inside comments never
/// reach the scope stack.
pub(crate) fn strip_block_comments(text: &str) -> String {
    BLOCK_COMMENT.replace_all(text, "").into_owned()
}

/// Split a physical line into its code part and an optional trailing `//` comment.
///
/// Markers inside quoted names or strings are not treated as comments.
pub(crate) fn split_line_comment(line: &str) -> (&str, Option<&str>) {
    let mut scanner = QuoteScanner::default();
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if scanner.feed(ch) {
            continue;
        }
        if ch == '/' && matches!(chars.peek(), Some((_, '/'))) {
            return (&line[..idx], Some(&line[idx..]));
        }
    }

    (line, None)
}

/// Tracks whether a character scan is inside a quoted section.
#[derive(Debug, Default)]
pub(crate) struct QuoteScanner {
    quote: Option<char>,
    escaped: bool,
}

impl QuoteScanner {
    /// Feed the next character. Returns `true` if it belongs to a quoted section
    /// (including the opening and closing quote).
    pub(crate) fn feed(&mut self, ch: char) -> bool {
        match self.quote {
            Some(quote) => {
                if self.escaped {
                    self.escaped = false;
                } else if ch == '\\' {
                    self.escaped = true;
                } else if ch == quote {
                    self.quote = None;
                }
                true
            }
            None if ch == '"' || ch == '\'' => {
                self.quote = Some(ch);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_multiline_block_comment() {
        let text = "part a; /* spans\n two } lines */ part b;";
        assert_eq!(strip_block_comments(text), "part a;  part b;");
    }

    #[test]
    fn test_strip_is_non_greedy() {
        let text = "/* one */ keep /* two */";
        assert_eq!(strip_block_comments(text), " keep ");
    }

    #[test]
    fn test_split_trailing_comment() {
        let (code, comment) = split_line_comment("part a; // the { part");
        assert_eq!(code, "part a; ");
        assert_eq!(comment, Some("// the { part"));
    }

    #[test]
    fn test_whole_line_comment() {
        let (code, comment) = split_line_comment("// just a note");
        assert_eq!(code, "");
        assert_eq!(comment, Some("// just a note"));
    }

    #[test]
    fn test_marker_inside_quotes_is_kept() {
        let (code, comment) = split_line_comment(r#"doc "see http://example.com";"#);
        assert_eq!(code, r#"doc "see http://example.com";"#);
        assert_eq!(comment, None);
    }
}
