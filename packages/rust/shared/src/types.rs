//! Core model types shared by the lexer and the tutorial tree.

use serde::{Deserialize, Serialize};

/// Name of the label attached to every extracted block.
pub const ANY_LABEL: &str = "__AnyLabel";

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// A caller-chosen tag selecting which extracted blocks a lesson contributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The label every block carries; selecting it selects everything.
    pub fn any() -> Self {
        Self(ANY_LABEL.to_string())
    }

    /// Build a label from user input, treating an empty string as [`Label::any`].
    pub fn from_user(name: &str) -> Self {
        let name = name.trim().trim_start_matches('@');
        if name.is_empty() {
            Self::any()
        } else {
            Self::new(name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_any(&self) -> bool {
        self.0 == ANY_LABEL
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// One fenced code block pulled out of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Labels from the preceding label comment, in source order.
    /// [`Label::any`] is always last.
    pub labels: Vec<Label>,
    /// First word of the fence info string, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Code between the fences, each line newline-terminated.
    pub code: String,
}

impl Block {
    pub fn new(labels: Vec<Label>, language: Option<String>, code: impl Into<String>) -> Self {
        Self {
            labels,
            language,
            code: code.into(),
        }
    }

    /// Labels written by the author, i.e. without [`Label::any`].
    pub fn user_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|l| !l.is_any())
    }
}
