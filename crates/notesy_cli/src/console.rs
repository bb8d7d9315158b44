//! Line-oriented console over the in-process pipeline.
//!
//! # Invariants
//! - One request at a time; a failed request never ends the loop.
//! - Any line except `exit`/`quit` is submitted, blank ones included.
//! - Only `exit`/`quit`, Ctrl-D and Ctrl-C end the session.

use anyhow::Result;
use colored::Colorize;
use log::info;
use notesy_core::{
    logging_status, NoteOutcome, NoteRequestService, ScriptRunner, ServiceError, TOOL_GUIDANCE,
};
use rustyline::{error::ReadlineError, DefaultEditor};

const PROMPT: &str = "notesy> ";

/// Reads requests until the user leaves.
pub fn run<R: ScriptRunner>(service: &NoteRequestService<R>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    print_banner();
    info!("event=console_start module=console status=ok");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if is_exit_command(&line) {
                    break;
                }
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.trim());
                }
                println!("{}", respond(service, &line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                println!("{} Input error: {err}", "✗".red());
                break;
            }
        }
    }

    println!("{}", "Goodbye! Your notes are where you left them.".cyan());
    info!("event=console_stop module=console status=ok");
    Ok(())
}

fn print_banner() {
    println!("{}", "NotesY: Apple Notes in plain English".bold().cyan());
    println!("Try: Create a note titled 'shopping list' with items: milk, eggs, bread");
    println!("Type 'exit' or 'quit' to leave.");
    if let Some((level, dir)) = logging_status() {
        println!("{}", format!("Logging {level} to {}", dir.display()).dimmed());
    }
    println!();
}

fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}

/// Reply for one submitted line; an empty line is rejected before parsing.
fn respond<R: ScriptRunner>(service: &NoteRequestService<R>, line: &str) -> String {
    if line.is_empty() {
        return format!(
            "{} text must contain at least 1 character",
            "✗ Error:".red().bold()
        );
    }
    render(&service.process(line))
}

fn render(result: &Result<NoteOutcome, ServiceError>) -> String {
    match result {
        Ok(outcome) => {
            let mut text = format!(
                "{}\n  Action: {}\n  Title: {}",
                "✓ Success:".green().bold(),
                outcome.command.action(),
                outcome.command.title()
            );
            if !outcome.output.trim().is_empty() {
                text.push_str(&format!("\n  Result: {}", outcome.output.trim()));
            }
            text
        }
        Err(ServiceError::Unrecognized) => {
            format!("{}\n{TOOL_GUIDANCE}", "Response:".yellow().bold())
        }
        Err(err) => format!("{} {err}", "✗ Error:".red().bold()),
    }
}
