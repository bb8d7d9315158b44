//! Structured note command and its validator.
//!
//! # Responsibility
//! - Define `NoteCommand`, the only domain entity handed to script generation.
//! - Validate raw extracted fields (`CommandDraft`) into a command.
//!
//! # Invariants
//! - `title` is never empty on a validated command.
//! - Validation checks field shape only. Action-specific field relevance
//!   (e.g. content on a delete) is never enforced.
//! - `folder` is accepted by the shape but no extraction rule fills it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Note-management intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Make a new note and append content paragraphs.
    Create,
    /// Append content to an existing note, creating it when missing.
    Update,
    /// Remove the first note with an exact name match.
    Delete,
    /// List note names containing the title as a substring.
    Search,
}

impl Action {
    /// All actions in wire order.
    pub const ALL: [Action; 4] = [Self::Create, Self::Update, Self::Delete, Self::Search];

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CommandValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or_else(|| CommandValidationError::UnknownAction(value.to_string()))
    }
}

/// Validation failures for command drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandValidationError {
    /// Action name outside `create|update|delete|search`.
    UnknownAction(String),
    /// Title has zero length.
    EmptyTitle,
}

impl Display for CommandValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(value) => write!(
                f,
                "unknown action `{value}`; expected create|update|delete|search"
            ),
            Self::EmptyTitle => write!(f, "title must contain at least 1 character"),
        }
    }
}

impl Error for CommandValidationError {}

/// Unvalidated command fields as produced by extraction or decoded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandDraft {
    pub action: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl CommandDraft {
    /// Creates a draft with no content and no folder.
    pub fn new(action: Action, title: impl Into<String>) -> Self {
        Self {
            action: action.as_str().to_string(),
            title: title.into(),
            content: None,
            folder: None,
        }
    }

    /// Sets the ordered content items.
    pub fn with_content(mut self, content: Vec<String>) -> Self {
        self.content = Some(content);
        self
    }

    /// Validates field shape and builds a command.
    ///
    /// # Errors
    /// - `UnknownAction` when `action` is not a lowercase wire name.
    /// - `EmptyTitle` when `title` is empty. Whitespace-only titles pass.
    pub fn validate(self) -> Result<NoteCommand, CommandValidationError> {
        let action = Action::from_str(&self.action)?;
        if self.title.is_empty() {
            return Err(CommandValidationError::EmptyTitle);
        }

        Ok(NoteCommand {
            action,
            title: self.title,
            content: self.content.unwrap_or_default(),
            folder: self.folder,
        })
    }
}

/// Validated note intent consumed by script generation.
///
/// Deserialization runs the same validation as [`CommandDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CommandDraft")]
pub struct NoteCommand {
    action: Action,
    title: String,
    content: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder: Option<String>,
}

impl NoteCommand {
    pub fn action(&self) -> Action {
        self.action
    }

    /// Note name, or the search substring for `Action::Search`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items appended in order; empty for delete/search.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Reserved container hint. Never set by extraction.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }
}

impl TryFrom<CommandDraft> for NoteCommand {
    type Error = CommandValidationError;

    fn try_from(value: CommandDraft) -> Result<Self, Self::Error> {
        value.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, CommandDraft, CommandValidationError};
    use std::str::FromStr;

    #[test]
    fn action_round_trips_through_wire_names() {
        for action in Action::ALL {
            assert_eq!(Action::from_str(action.as_str()).expect("wire name should parse"), action);
        }
    }

    #[test]
    fn action_names_are_case_sensitive() {
        let err = Action::from_str("Create").expect_err("capitalized name should be rejected");
        assert_eq!(err, CommandValidationError::UnknownAction("Create".into()));
    }

    #[test]
    fn validate_defaults_missing_content_to_empty() {
        let command = CommandDraft::new(Action::Delete, "old tasks")
            .validate()
            .expect("draft should validate");
        assert!(command.content().is_empty());
        assert_eq!(command.folder(), None);
    }

    #[test]
    fn validate_accepts_whitespace_title() {
        let command = CommandDraft::new(Action::Search, " ")
            .validate()
            .expect("draft should validate");
        assert_eq!(command.title(), " ");
    }
}
