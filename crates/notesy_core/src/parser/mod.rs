//! Natural-language intent extraction.
//!
//! # Responsibility
//! - Classify free-form text into one of the four note intents.
//! - Extract title and content spans and validate them into a `NoteCommand`.
//!
//! # Invariants
//! - Parsing is stateless and deterministic; each input stands alone.
//! - Rules run in `RULES` order and the first validated draft wins.
//! - A validation failure inside a `Reject` family ends the parse with no
//!   command, even if a later family would have matched.

pub mod content;
pub mod rules;

use crate::model::command::NoteCommand;
use log::debug;
use rules::{OnInvalid, RuleInput, RULES};

pub use rules::{RuleFamily, LONG_TEXT_THRESHOLD};

/// Command plus the rule family that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIntent {
    pub family: RuleFamily,
    pub command: NoteCommand,
}

/// Parses text into a validated command.
///
/// Returns `None` when no rule matches or a matched rule rejects.
pub fn parse_note_request(text: &str) -> Option<NoteCommand> {
    classify(text).map(|intent| intent.command)
}

/// Runs the rule cascade and reports which family matched.
pub fn classify(text: &str) -> Option<ParsedIntent> {
    let input = RuleInput::new(text);

    for rule in &RULES {
        if !(rule.applies)(&input) {
            continue;
        }
        let Some(draft) = (rule.extract)(&input) else {
            continue;
        };

        match draft.validate() {
            Ok(command) => {
                debug!(
                    "event=intent_parsed module=parser status=ok family={} action={} content_items={}",
                    rule.family.as_str(),
                    command.action(),
                    command.content().len()
                );
                return Some(ParsedIntent {
                    family: rule.family,
                    command,
                });
            }
            Err(err) => {
                debug!(
                    "event=intent_rejected module=parser status=invalid family={} reason={}",
                    rule.family.as_str(),
                    err
                );
                if rule.on_invalid == OnInvalid::Reject {
                    return None;
                }
            }
        }
    }

    debug!(
        "event=intent_unmatched module=parser status=none text_chars={}",
        text.chars().count()
    );
    None
}
