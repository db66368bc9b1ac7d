use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ResponseAnalysis;
use crate::enums::InboxStatus;

/// A reply received from a lead, waiting for (or holding) an analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InboxReply {
    pub lead_id: String,
    pub text: String,
    pub name: String,
    pub status: InboxStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResponseAnalysis>,
}

impl InboxReply {
    #[must_use]
    pub fn new(lead_id: &str, name: &str, text: &str) -> Self {
        Self {
            lead_id: lead_id.to_string(),
            text: text.to_string(),
            name: name.to_string(),
            status: InboxStatus::New,
            analysis: None,
        }
    }
}
