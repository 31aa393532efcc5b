//! NavAction - Browsing buttons

use serde::{Deserialize, Serialize};

/// Navigation signal carried by an inline button
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Previous,
    Next,
}

impl NavAction {
    /// Callback payload attached to the button
    pub fn callback_data(&self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::Next => "next",
        }
    }

    /// Button label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
        }
    }

    /// Parse a callback payload. Unknown payloads yield `None`.
    pub fn from_callback_data(data: &str) -> Option<Self> {
        match data {
            "prev" | "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}
