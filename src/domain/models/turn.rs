use serde::{Deserialize, Serialize};

/// One completed exchange: a user message paired with the assistant's reply.
///
/// Immutable once created. Serializes to the wire shape the flow service
/// expects for conversational context: `{"user": ..., "bot": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "user")]
    user_text: String,
    #[serde(rename = "bot")]
    assistant_text: String,
}

impl Turn {
    pub fn new(user_text: impl Into<String>, assistant_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            assistant_text: assistant_text.into(),
        }
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn assistant_text(&self) -> &str {
        &self.assistant_text
    }
}
