use notesy_core::{generate_script, parse_note_request, Action, CommandDraft, NoteCommand};

fn command(action: Action, title: &str, content: &[&str]) -> NoteCommand {
    CommandDraft::new(action, title)
        .with_content(content.iter().map(|item| item.to_string()).collect())
        .validate()
        .expect("draft should validate")
}

#[test]
fn create_appends_paragraphs_in_order() {
    let script = generate_script(&command(Action::Create, "shopping list", &["milk", "eggs"]));
    assert!(script.starts_with("tell application \"Notes\"\n"));
    assert!(script.contains("make new note with properties {name:\"shopping list\"}"));
    let milk = script.find("with data \"milk\"").expect("line should be present");
    let eggs = script.find("with data \"eggs\"").expect("line should be present");
    assert!(milk < eggs);
    assert!(script.trim_end().ends_with("end tell"));
}

#[test]
fn update_appends_to_exact_match_then_falls_back_to_create() {
    let script = generate_script(&command(Action::Update, "work tasks", &["Call Sarah"]));
    let expected = concat!(
        "tell application \"Notes\"\n",
        "    set noteFound to false\n",
        "    repeat with theNote in notes\n",
        "        if name of theNote is \"work tasks\" then\n",
        "            set noteFound to true\n",
        "            tell theNote\n",
        "                make new paragraph at the end with data \"Call Sarah\"\n",
        "            end tell\n",
        "            exit repeat\n",
        "        end if\n",
        "    end repeat\n",
        "    if not noteFound then\n",
        "        set newNote to make new note with properties {name:\"work tasks\"}\n",
        "        tell newNote to make new paragraph at the end with data \"Call Sarah\"\n",
        "    end if\n",
        "end tell\n",
    );
    assert_eq!(script, expected);
}

#[test]
fn delete_stops_after_first_exact_match() {
    let script = generate_script(&command(Action::Delete, "old tasks", &[]));
    assert!(script.contains("if name of theNote is \"old tasks\" then"));
    assert!(script.contains("delete theNote"));
    assert!(script.contains("exit repeat"));
    assert!(!script.contains("error"));
}

#[test]
fn search_uses_substring_match_while_update_and_delete_do_not() {
    let search = generate_script(&command(Action::Search, "recipe", &[]));
    assert!(search.contains("if name of theNote contains \"recipe\" then"));
    assert!(search.contains("set end of matchingNotes to name of theNote"));
    assert!(search.contains("return matchingNotes"));

    for action in [Action::Update, Action::Delete] {
        let script = generate_script(&command(action, "recipe", &["x"]));
        assert!(script.contains("if name of theNote is \"recipe\" then"));
        assert!(!script.contains("contains"));
    }
}

#[test]
fn user_double_quotes_are_escaped_exactly_once() {
    let title = r#"the "big" plan"#;
    let item = r#"say "hello""#;
    for action in [Action::Create, Action::Update] {
        let script = generate_script(&command(action, title, &[item]));
        assert!(script.contains(r#""the \"big\" plan""#));
        assert!(script.contains(r#""say \"hello\"""#));
        assert!(!script.contains(r#"\\""#));

        let escaped = if action == Action::Update { 8 } else { 4 };
        assert_eq!(script.matches(r#"\""#).count(), escaped);

        let baseline = generate_script(&command(action, "the big plan", &["say hello"]));
        let remaining = script.replace(r#"\""#, "");
        assert_eq!(remaining.matches('"').count(), baseline.matches('"').count());
    }
}

#[test]
fn single_quotes_and_backslashes_pass_through() {
    let script = generate_script(&command(Action::Create, r"it's a\b", &[]));
    assert!(script.contains(r#"{name:"it's a\b"}"#));
}

#[test]
fn generation_is_a_pure_function_of_input_text() {
    let text = "Create a note titled 'shopping list' with items: milk, eggs, bread";
    let first = generate_script(&parse_note_request(text).expect("text should parse"));
    let second = generate_script(&parse_note_request(text).expect("text should parse"));
    assert_eq!(first, second);
}
