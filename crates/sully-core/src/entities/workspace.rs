use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Lead;

/// Icons a new workspace may be given.
pub const WORKSPACE_ICONS: [&str; 5] = ["🛡️", "🏥", "🛍️", "💰", "🚀"];

/// Accent colors a new workspace may be given.
pub const WORKSPACE_COLORS: [&str; 5] = [
    "bg-blue-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-purple-500",
    "bg-rose-500",
];

/// An isolated namespace grouping one client's or startup's data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Workspace {
    /// Build a workspace, picking icon and color by index (wrapping).
    #[must_use]
    pub fn with_style(id: String, name: &str, icon_idx: usize, color_idx: usize) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            icon: WORKSPACE_ICONS[icon_idx % WORKSPACE_ICONS.len()].to_string(),
            color: WORKSPACE_COLORS[color_idx % WORKSPACE_COLORS.len()].to_string(),
        }
    }
}

/// Dashboard roll-up for a single workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub workspace_id: String,
    pub name: String,
    pub total_leads: usize,
    pub scored_leads: usize,
    /// Mean of current scores across scored leads, rounded down.
    pub average_score: Option<u32>,
    pub status_counts: BTreeMap<String, usize>,
    pub open_tasks: usize,
    pub pending_replies: usize,
    pub last_sync: String,
}

impl WorkspaceSummary {
    #[must_use]
    pub fn from_leads(
        workspace: &Workspace,
        leads: &[Lead],
        open_tasks: usize,
        pending_replies: usize,
        last_sync: Option<String>,
    ) -> Self {
        let mut status_counts = BTreeMap::new();
        for lead in leads {
            *status_counts
                .entry(lead.status.as_str().to_string())
                .or_insert(0) += 1;
        }

        let scores: Vec<u64> = leads
            .iter()
            .filter_map(|l| l.score)
            .map(u64::from)
            .collect();
        let average_score = if scores.is_empty() {
            None
        } else {
            let total: u64 = scores.iter().sum();
            u32::try_from(total / scores.len() as u64).ok()
        };

        Self {
            workspace_id: workspace.id.clone(),
            name: workspace.name.clone(),
            total_leads: leads.len(),
            scored_leads: scores.len(),
            average_score,
            status_counts,
            open_tasks,
            pending_replies,
            last_sync: last_sync.unwrap_or_else(|| "Never".to_string()),
        }
    }
}
