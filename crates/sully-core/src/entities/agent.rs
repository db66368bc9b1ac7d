use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AgentKind, AgentTaskStatus, LogKind};

/// A unit of work assigned to one of the background agents.
///
/// Progress is driven by a simulated ticker, not by real work.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentTask {
    pub id: String,
    pub agent_name: String,
    pub description: String,
    pub status: AgentTaskStatus,
    /// Percentage complete, 0-100.
    pub progress: u8,
    pub step: String,
    pub timestamp: DateTime<Utc>,
}

impl AgentTask {
    /// A new pending task at zero progress.
    #[must_use]
    pub fn assign(id: String, agent: AgentKind, description: &str, now: DateTime<Utc>) -> Self {
        Self {
            id,
            agent_name: agent.display_name().to_string(),
            description: description.to_string(),
            status: AgentTaskStatus::Pending,
            progress: 0,
            step: "Initializing...".to_string(),
            timestamp: now,
        }
    }
}

/// An entry in a workspace's agent activity feed. Newest entries first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgentLogEntry {
    pub time: DateTime<Utc>,
    pub agent: String,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}
