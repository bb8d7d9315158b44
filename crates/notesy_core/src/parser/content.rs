//! Content span shaping for extracted commands.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•*]\s*").expect("valid bullet regex"));

/// Splits a trailing content span into ordered items.
///
/// Rules, first match wins:
/// - span contains `,`: split on commas, trim each item;
/// - span contains a line break: one item per line, trimmed, leading bullet
///   marker (`-`, `•`, `*`) removed;
/// - otherwise: the trimmed span is the single item.
///
/// Empty items are kept, so `"a,,b"` yields three items.
pub fn split_content_items(span: &str) -> Vec<String> {
    if span.contains(',') {
        return span.split(',').map(|item| item.trim().to_string()).collect();
    }

    if span.contains('\n') {
        return span
            .split('\n')
            .map(|line| LEADING_BULLET_RE.replace(line.trim(), "").into_owned())
            .collect();
    }

    vec![span.trim().to_string()]
}

/// Removes one matching pair of surrounding `"` or `'` quotes.
pub fn strip_wrapping_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// First `word_limit` whitespace-separated words of the first line.
pub fn leading_words_title(text: &str, word_limit: usize) -> String {
    let first_line = text.split('\n').next().unwrap_or_default().trim();
    first_line
        .split_whitespace()
        .take(word_limit)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{leading_words_title, split_content_items, strip_wrapping_quotes};

    #[test]
    fn comma_split_wins_over_line_split() {
        let items = split_content_items("milk, eggs\n- bread");
        assert_eq!(items, vec!["milk", "eggs\n- bread"]);
    }

    #[test]
    fn line_split_strips_bullets() {
        let items = split_content_items("- milk\n• eggs\n*  bread");
        assert_eq!(items, vec!["milk", "eggs", "bread"]);
    }

    #[test]
    fn single_span_is_trimmed() {
        assert_eq!(split_content_items("  call mom  "), vec!["call mom"]);
    }

    #[test]
    fn empty_comma_items_are_kept() {
        assert_eq!(split_content_items("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn strip_wrapping_quotes_requires_matching_pair() {
        assert_eq!(strip_wrapping_quotes("\"Call Sarah\""), "Call Sarah");
        assert_eq!(strip_wrapping_quotes("'buy milk'"), "buy milk");
        assert_eq!(strip_wrapping_quotes("\"mixed'"), "\"mixed'");
        assert_eq!(strip_wrapping_quotes("\""), "\"");
    }

    #[test]
    fn leading_words_title_uses_first_line_only() {
        let title = leading_words_title("  Project  status update for Q3 review\nbody", 5);
        assert_eq!(title, "Project status update for Q3");
    }
}
