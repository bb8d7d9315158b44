//! AppleScript generation for note commands.
//!
//! # Responsibility
//! - Map a validated `NoteCommand` to Notes.app automation text.
//! - Keep templating testable without running any script.
//!
//! # Invariants
//! - Output is a pure function of the command.
//! - Only `"` is escaped in user text; nothing else is rewritten.

mod applescript;
mod builder;

pub use applescript::{escape_applescript_string, generate_script, generate_script_for};
pub use builder::ScriptBuilder;
