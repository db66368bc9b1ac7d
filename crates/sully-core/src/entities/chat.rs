use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::GroundingSource;
use crate::enums::ChatRole;

/// One turn of the workspace strategy chat. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minitasks: Option<Vec<String>>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            sources: None,
            minitasks: None,
        }
    }

    /// An agent reply. Empty source and minitask lists are stored as absent.
    #[must_use]
    pub fn agent(
        text: impl Into<String>,
        sources: Vec<GroundingSource>,
        minitasks: Vec<String>,
    ) -> Self {
        Self {
            role: ChatRole::Agent,
            text: text.into(),
            sources: Some(sources).filter(|s| !s.is_empty()),
            minitasks: Some(minitasks).filter(|m| !m.is_empty()),
        }
    }
}
