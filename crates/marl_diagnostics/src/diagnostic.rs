//! The immutable diagnostic record rendered for users.

use crate::level::Level;
use crate::position::SourcePosition;
use serde::{Deserialize, Serialize};

/// One reportable event (error or warning) from a Marl tool.
///
/// A diagnostic is a plain immutable value: the producing tool fills in
/// every field, the renderer reads them, and nothing mutates the record in
/// between. Each optional field suppresses its output section when absent.
/// `current_line` uses the empty string as its "no code context" sentinel;
/// an empty `current_line` suppresses the whole snippet, including the
/// surrounding lines and the caret.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The level of this diagnostic.
    pub level: Level,
    /// Short categorical label (e.g. `type-error`).
    pub name: String,
    /// Free-text explanation of the problem.
    pub description: String,
    /// Where the problem was detected, if known.
    pub position: Option<SourcePosition>,
    /// The source line containing the problem; empty when no code context
    /// is available.
    #[serde(default)]
    pub current_line: String,
    /// The source line preceding `current_line`, if available.
    pub previous_line: Option<String>,
    /// The source line following `current_line`, if available.
    pub next_line: Option<String>,
    /// Supplementary text shown after the code snippet.
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with the given level, label, and description.
    pub fn new(level: Level, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            description: description.into(),
            position: None,
            current_line: String::new(),
            previous_line: None,
            next_line: None,
            hint: None,
        }
    }

    /// Creates an error-level diagnostic with the given label and description.
    pub fn error(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Level::Error, name, description)
    }

    /// Creates a warning-level diagnostic with the given label and description.
    pub fn warning(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Level::Warning, name, description)
    }

    /// Sets the source position of this diagnostic.
    pub fn with_position(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the code context: the offending line and its neighbors.
    pub fn with_code_context(
        mut self,
        current_line: impl Into<String>,
        previous_line: Option<String>,
        next_line: Option<String>,
    ) -> Self {
        self.current_line = current_line.into();
        self.previous_line = previous_line;
        self.next_line = next_line;
        self
    }

    /// Sets the hint shown after the snippet.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Returns `true` if this diagnostic carries a code snippet to render.
    pub fn has_code_context(&self) -> bool {
        !self.current_line.is_empty()
    }
}
