//! Human-readable replies shared by the HTTP, console and tool transports.

use crate::model::command::{Action, NoteCommand};

/// Example phrasings returned with HTTP parse failures.
pub const SUPPORTED_FORMATS: [&str; 3] = [
    "Create a note titled 'x' with items: a, b, c",
    "Add x to my 'y' note",
    "Delete my 'x' note",
];

/// Guidance shown by the tool and console transports on parse failure.
pub const TOOL_GUIDANCE: &str = "I couldn't understand your request. Try phrasing it like:\n\
- Create a note titled 'shopping list' with items: milk, eggs, bread\n\
- Add meeting notes to my 'work' note\n\
- Delete my 'old tasks' note\n\
- Search for notes with 'project'";

/// Unwraps a JSON-encoded `{"text": "..."}` payload.
///
/// Applies only when the trimmed input starts with `{` and mentions `text`;
/// any parse failure or a missing/empty/non-string `text` keeps the input.
pub fn unwrap_tool_text(raw: &str) -> String {
    if !raw.trim_start().starts_with('{') || !raw.contains("text") {
        return raw.to_string();
    }

    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| {
            value
                .get("text")
                .and_then(serde_json::Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Note names from comma-separated search output; empty for blank output.
pub fn search_hits(output: &str) -> Vec<String> {
    if output.trim().is_empty() {
        return Vec::new();
    }
    output
        .split(',')
        .map(|name| name.trim().to_string())
        .collect()
}

/// Action-specific summary sentence for a completed request.
pub fn format_tool_reply(command: &NoteCommand, output: &str) -> String {
    let title = command.title();
    match command.action() {
        Action::Create => format!("Successfully created note '{title}'"),
        Action::Update => format!("Successfully updated note '{title}'"),
        Action::Delete => format!("Successfully deleted note '{title}'"),
        Action::Search => {
            let hits = search_hits(output);
            if hits.is_empty() {
                return format!("No notes found matching '{title}'");
            }
            let listing = hits
                .iter()
                .map(|name| format!("- {name}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "Found {} note(s) matching '{title}':\n{listing}",
                hits.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{format_tool_reply, search_hits, unwrap_tool_text};
    use crate::model::command::{Action, CommandDraft};

    #[test]
    fn unwrap_tool_text_decodes_wrapped_payload() {
        let raw = r#"  {"text": "Delete my 'old' note"}"#;
        assert_eq!(unwrap_tool_text(raw), "Delete my 'old' note");
    }

    #[test]
    fn unwrap_tool_text_keeps_invalid_or_empty_payloads() {
        assert_eq!(unwrap_tool_text("{text: nope"), "{text: nope");
        assert_eq!(unwrap_tool_text(r#"{"text": ""}"#), r#"{"text": ""}"#);
        assert_eq!(unwrap_tool_text(r#"{"text": 7}"#), r#"{"text": 7}"#);
        assert_eq!(unwrap_tool_text("plain text"), "plain text");
    }

    #[test]
    fn search_hits_trims_names() {
        assert_eq!(
            search_hits("Recipes, My Recipes\n"),
            vec!["Recipes", "My Recipes"]
        );
        assert!(search_hits(" \n").is_empty());
    }

    #[test]
    fn search_reply_lists_hits() {
        let command = CommandDraft::new(Action::Search, "recipe")
            .validate()
            .expect("draft should validate");
        assert_eq!(
            format_tool_reply(&command, "Recipes, My Recipes\n"),
            "Found 2 note(s) matching 'recipe':\n- Recipes\n- My Recipes"
        );
        assert_eq!(
            format_tool_reply(&command, ""),
            "No notes found matching 'recipe'"
        );
    }

    #[test]
    fn mutation_replies_name_the_note() {
        let command = CommandDraft::new(Action::Delete, "old tasks")
            .validate()
            .expect("draft should validate");
        assert_eq!(
            format_tool_reply(&command, ""),
            "Successfully deleted note 'old tasks'"
        );
    }
}
