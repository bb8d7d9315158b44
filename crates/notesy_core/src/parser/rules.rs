//! Ordered extraction rule table.
//!
//! # Responsibility
//! - Hold one `Rule` per phrasing family in fixed precedence order.
//! - Keep each family's predicate, extractor and validation-failure policy
//!   side by side.
//!
//! # Invariants
//! - `RULES` order is the precedence order; the first validated rule wins.
//! - Keyword predicates read the lowercased text; captures read the original.
//! - Trip location patterns are case-sensitive even though the keyword
//!   check is not.

use crate::model::command::{Action, CommandDraft};
use crate::parser::content::{leading_words_title, split_content_items, strip_wrapping_quotes};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Inputs longer than this many chars (and quote-free) become free-form notes.
pub const LONG_TEXT_THRESHOLD: usize = 100;
/// Word count used for titles derived from free-form text.
pub const LONG_TEXT_TITLE_WORDS: usize = 5;

const TRIP_KEYWORDS: [&str; 3] = ["trip", "travel", "vacation"];
const FALLBACK_KEYWORDS: [&str; 3] = ["create", "new", "make"];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid intent regex"))
        .collect()
}

static TRIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?:trip|travel|vacation)(?:\s+(?:to|for|in))?\s+([A-Za-z\s,]+)",
        r"([A-Za-z\s,]+)(?:\s+(?:trip|travel|vacation))",
    ])
});

static CREATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r#"(?i)create\s+(?:a\s+)?note\s+(?:titled|called|named)\s+['"](.+?)['"](?:\s+with\s+(?:items|content|text)(?:\s*:|:|\s+of)?)?(?:\s+(.+))?"#,
        r#"(?i)(?:make|add)\s+(?:a\s+)?(?:new\s+)?note\s+(?:titled|called|named)\s+['"](.+?)['"](?:\s+with\s+(?:items|content|text)(?:\s*:|:|\s+of)?)?(?:\s+(.+))?"#,
        r#"(?i)(?:take|write)\s+(?:a\s+)?note\s+(?:titled|called|named)\s+['"](.+?)['"](?:\s+with\s+(?:items|content|text)(?:\s*:|:|\s+of)?)?(?:\s+(.+))?"#,
    ])
});

static UPDATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r#"(?i)add\s+(.+?)\s+to\s+(?:my\s+)?['"](.+?)['"](?:\s+note)?"#,
        r#"(?i)update\s+(?:my\s+)?['"](.+?)['"](?:\s+note)?\s+(?:with|to(?:\s+add)?)\s+(.+)"#,
        r#"(?i)append\s+(.+?)\s+to\s+(?:my\s+)?['"](.+?)['"](?:\s+note)?"#,
    ])
});

static DELETE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r#"(?i)delete\s+(?:my\s+)?(?:note\s+)?['"](.+?)['"](?:\s+note)?"#,
        r#"(?i)remove\s+(?:my\s+)?(?:note\s+)?['"](.+?)['"](?:\s+note)?"#,
        r#"(?i)trash\s+(?:my\s+)?(?:note\s+)?['"](.+?)['"](?:\s+note)?"#,
        r#"(?i)get\s+rid\s+of\s+(?:my\s+)?(?:note\s+)?['"](.+?)['"](?:\s+note)?"#,
    ])
});

static SEARCH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r#"(?i)(?:search|find|look\s+for)\s+(?:my\s+)?(?:note\s+)?['"](.+?)['"](?:\s+note)?"#,
        r#"(?i)(?:search|find|look)\s+(?:for\s+)?(?:notes?\s+)?(?:with|containing|about)\s+['"](.+?)['"](?:\s+note)?"#,
    ])
});

static QUOTED_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"](.+?)['"]"#).expect("valid quoted span regex"));
static NOTE_TOPIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)note\s+(?:about|on|for)\s+(.+?)(?:\s|$)").expect("valid note topic regex")
});

/// Phrasing family a rule recognizes, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleFamily {
    LongText,
    TripPlan,
    ExplicitCreate,
    Update,
    Delete,
    Search,
    FallbackCreate,
}

impl RuleFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongText => "long_text",
            Self::TripPlan => "trip_plan",
            Self::ExplicitCreate => "explicit_create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::FallbackCreate => "fallback_create",
        }
    }
}

/// What the cascade does when a rule matched but its draft fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnInvalid {
    /// Keep evaluating lower-priority rules.
    FallThrough,
    /// Stop and report a parse failure.
    Reject,
}

/// Text view shared by all rule predicates and extractors.
pub struct RuleInput<'a> {
    pub text: &'a str,
    pub lower: String,
}

impl<'a> RuleInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
        }
    }

    fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.lower.contains(keyword))
    }
}

/// One entry of the precedence cascade.
pub struct Rule {
    pub family: RuleFamily,
    pub on_invalid: OnInvalid,
    pub applies: fn(&RuleInput<'_>) -> bool,
    pub extract: fn(&RuleInput<'_>) -> Option<CommandDraft>,
}

/// Extraction rules in precedence order.
pub static RULES: [Rule; 7] = [
    Rule {
        family: RuleFamily::LongText,
        on_invalid: OnInvalid::FallThrough,
        applies: is_long_free_text,
        extract: extract_long_text,
    },
    Rule {
        family: RuleFamily::TripPlan,
        on_invalid: OnInvalid::FallThrough,
        applies: mentions_trip,
        extract: extract_trip_plan,
    },
    Rule {
        family: RuleFamily::ExplicitCreate,
        on_invalid: OnInvalid::Reject,
        applies: always,
        extract: extract_explicit_create,
    },
    Rule {
        family: RuleFamily::Update,
        on_invalid: OnInvalid::Reject,
        applies: always,
        extract: extract_update,
    },
    Rule {
        family: RuleFamily::Delete,
        on_invalid: OnInvalid::Reject,
        applies: always,
        extract: extract_delete,
    },
    Rule {
        family: RuleFamily::Search,
        on_invalid: OnInvalid::Reject,
        applies: always,
        extract: extract_search,
    },
    Rule {
        family: RuleFamily::FallbackCreate,
        on_invalid: OnInvalid::Reject,
        applies: mentions_create_keyword,
        extract: extract_fallback_create,
    },
];

fn always(_: &RuleInput<'_>) -> bool {
    true
}

fn is_long_free_text(input: &RuleInput<'_>) -> bool {
    input.text.chars().count() > LONG_TEXT_THRESHOLD
        && !input.text.contains('"')
        && !input.text.contains('\'')
}

fn mentions_trip(input: &RuleInput<'_>) -> bool {
    input.mentions_any(&TRIP_KEYWORDS)
}

fn mentions_create_keyword(input: &RuleInput<'_>) -> bool {
    input.mentions_any(&FALLBACK_KEYWORDS)
}

fn first_captures<'t>(patterns: &[Regex], text: &'t str) -> Option<Captures<'t>> {
    patterns.iter().find_map(|pattern| pattern.captures(text))
}

fn group<'t>(captures: &Captures<'t>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|m| m.as_str())
}

fn extract_long_text(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let title = leading_words_title(input.text, LONG_TEXT_TITLE_WORDS);
    Some(CommandDraft::new(Action::Create, title).with_content(vec![input.text.to_string()]))
}

fn extract_trip_plan(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let captures = first_captures(&TRIP_PATTERNS, input.text)?;
    let location = group(&captures, 1)?.trim();
    Some(
        CommandDraft::new(Action::Create, format!("Trip plan: {location}"))
            .with_content(vec![input.text.to_string()]),
    )
}

fn extract_explicit_create(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let captures = first_captures(&CREATE_PATTERNS, input.text)?;
    let title = group(&captures, 1)?;
    let content = group(&captures, 2)
        .map(split_content_items)
        .unwrap_or_default();
    Some(CommandDraft::new(Action::Create, title).with_content(content))
}

fn extract_update(input: &RuleInput<'_>) -> Option<CommandDraft> {
    // The "update" phrasing captures title first; the others capture content first.
    let title_first = input.lower.contains("update");

    UPDATE_PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(input.text)?;
        let first = group(&captures, 1).unwrap_or_default();
        let second = group(&captures, 2).unwrap_or_default();
        let (title, content) = if title_first && !first.is_empty() {
            (first, second)
        } else {
            (second, first)
        };
        if title.is_empty() || content.is_empty() {
            return None;
        }

        let item = strip_wrapping_quotes(content.trim()).to_string();
        Some(CommandDraft::new(Action::Update, title).with_content(vec![item]))
    })
}

fn extract_delete(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let captures = first_captures(&DELETE_PATTERNS, input.text)?;
    Some(CommandDraft::new(Action::Delete, group(&captures, 1)?))
}

fn extract_search(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let captures = first_captures(&SEARCH_PATTERNS, input.text)?;
    Some(CommandDraft::new(Action::Search, group(&captures, 1)?))
}

fn extract_fallback_create(input: &RuleInput<'_>) -> Option<CommandDraft> {
    let captures = QUOTED_SPAN_RE
        .captures(input.text)
        .or_else(|| NOTE_TOPIC_RE.captures(input.text))?;
    Some(CommandDraft::new(Action::Create, group(&captures, 1)?).with_content(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::{
        extract_trip_plan, extract_update, is_long_free_text, RuleFamily, RuleInput, RULES,
    };

    #[test]
    fn rules_are_ordered_by_precedence() {
        let families = RULES.iter().map(|rule| rule.family).collect::<Vec<_>>();
        assert_eq!(
            families,
            vec![
                RuleFamily::LongText,
                RuleFamily::TripPlan,
                RuleFamily::ExplicitCreate,
                RuleFamily::Update,
                RuleFamily::Delete,
                RuleFamily::Search,
                RuleFamily::FallbackCreate,
            ]
        );
    }

    #[test]
    fn long_text_threshold_is_exclusive() {
        let exactly = "a".repeat(100);
        let over = "a".repeat(101);
        assert!(!is_long_free_text(&RuleInput::new(&exactly)));
        assert!(is_long_free_text(&RuleInput::new(&over)));
    }

    #[test]
    fn long_text_rejects_either_quote_kind() {
        let single = format!("{}'", "a".repeat(120));
        let double = format!("{}\"", "a".repeat(120));
        assert!(!is_long_free_text(&RuleInput::new(&single)));
        assert!(!is_long_free_text(&RuleInput::new(&double)));
    }

    #[test]
    fn trip_location_pattern_is_case_sensitive() {
        assert!(extract_trip_plan(&RuleInput::new("Trip to Paris")).is_none());
        let draft = extract_trip_plan(&RuleInput::new("plan a trip to Paris"))
            .expect("pattern should match");
        assert_eq!(draft.title, "Trip plan: Paris");
    }

    #[test]
    fn update_phrasing_captures_title_first() {
        let draft = extract_update(&RuleInput::new("Update my 'groceries' note with oat milk"))
            .expect("pattern should match");
        assert_eq!(draft.title, "groceries");
        assert_eq!(draft.content, Some(vec!["oat milk".to_string()]));
    }

    #[test]
    fn update_word_anywhere_flips_capture_order() {
        // Any "update" in the text swaps the groups, even inside a title.
        let draft =
            extract_update(&RuleInput::new("Add milk to my 'update log' note"))
                .expect("pattern should match");
        assert_eq!(draft.title, "milk");
        assert_eq!(draft.content, Some(vec!["update log".to_string()]));
    }
}
