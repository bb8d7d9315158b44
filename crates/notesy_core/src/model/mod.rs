//! Domain model for note-management intents.
//!
//! # Responsibility
//! - Define the one structured command shape every transport consumes.
//! - Own the validation that turns extracted fields into a command.
//!
//! # Invariants
//! - A `NoteCommand` only exists after validation succeeded.
//! - Commands are one-shot values: built per input, never mutated.

pub mod command;
