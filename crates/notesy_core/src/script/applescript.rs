//! Notes.app AppleScript templates, one per action.

use crate::model::command::{Action, NoteCommand};
use crate::script::builder::ScriptBuilder;
use std::str::FromStr;

const NOTES_APP: &str = "tell application \"Notes\"";

/// Escapes user text for embedding inside an AppleScript string literal.
///
/// Only `"` is escaped. Backslashes and control characters pass through
/// unchanged.
pub fn escape_applescript_string(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Generates the automation script for a validated command.
pub fn generate_script(command: &NoteCommand) -> String {
    render(command.action(), command.title(), command.content())
}

/// Generates a script from a raw action name.
///
/// Returns an empty string when `action` is not a known wire name.
pub fn generate_script_for(action: &str, title: &str, content: &[String]) -> String {
    match Action::from_str(action) {
        Ok(action) => render(action, title, content),
        Err(_) => String::new(),
    }
}

fn render(action: Action, title: &str, content: &[String]) -> String {
    let title = quoted(title);
    let items = content.iter().map(|item| quoted(item)).collect::<Vec<_>>();

    let mut builder = ScriptBuilder::new();
    builder.block(NOTES_APP, "end tell", |b| match action {
        Action::Create => create_note(b, &title, &items),
        Action::Update => update_note(b, &title, &items),
        Action::Delete => delete_note(b, &title),
        Action::Search => search_notes(b, &title),
    });
    builder.finish()
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_applescript_string(value))
}

fn create_note(b: &mut ScriptBuilder, title: &str, items: &[String]) {
    b.line(format!(
        "set newNote to make new note with properties {{name:{title}}}"
    ));
    b.lines(
        items
            .iter()
            .map(|item| format!("tell newNote to make new paragraph at the end with data {item}")),
    );
}

fn update_note(b: &mut ScriptBuilder, title: &str, items: &[String]) {
    b.line("set noteFound to false");
    b.block("repeat with theNote in notes", "end repeat", |b| {
        b.block(
            format!("if name of theNote is {title} then"),
            "end if",
            |b| {
                b.line("set noteFound to true");
                b.block("tell theNote", "end tell", |b| {
                    b.lines(
                        items
                            .iter()
                            .map(|item| format!("make new paragraph at the end with data {item}")),
                    );
                });
                b.line("exit repeat");
            },
        );
    });
    b.block("if not noteFound then", "end if", |b| {
        create_note(b, title, items);
    });
}

fn delete_note(b: &mut ScriptBuilder, title: &str) {
    b.line("set noteFound to false");
    b.block("repeat with theNote in notes", "end repeat", |b| {
        b.block(
            format!("if name of theNote is {title} then"),
            "end if",
            |b| {
                b.line("set noteFound to true");
                b.line("delete theNote");
                b.line("exit repeat");
            },
        );
    });
}

fn search_notes(b: &mut ScriptBuilder, title: &str) {
    b.line("set matchingNotes to {}");
    b.block("repeat with theNote in notes", "end repeat", |b| {
        b.block(
            format!("if name of theNote contains {title} then"),
            "end if",
            |b| {
                b.line("set end of matchingNotes to name of theNote");
            },
        );
    });
    b.line("return matchingNotes");
}

#[cfg(test)]
mod tests {
    use super::{escape_applescript_string, generate_script_for};

    #[test]
    fn escape_only_touches_double_quotes() {
        assert_eq!(
            escape_applescript_string(r#"say "hi" \ 'there'"#),
            r#"say \"hi\" \ 'there'"#
        );
    }

    #[test]
    fn unknown_action_name_renders_nothing() {
        assert_eq!(generate_script_for("archive", "x", &[]), "");
    }

    #[test]
    fn create_script_matches_template() {
        let script = generate_script_for("create", "groceries", &["milk".to_string()]);
        assert_eq!(
            script,
            concat!(
                "tell application \"Notes\"\n",
                "    set newNote to make new note with properties {name:\"groceries\"}\n",
                "    tell newNote to make new paragraph at the end with data \"milk\"\n",
                "end tell\n",
            )
        );
    }
}
