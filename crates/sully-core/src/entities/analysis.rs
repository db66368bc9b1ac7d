use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EngagementLevel;

/// Interpretation of a lead's reply to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAnalysis {
    /// Needs extracted from the reply, `; `-separated.
    pub extracted_needs: String,
    /// Alignment with the workspace strategy, 0-100.
    pub alignment_score: u32,
    /// Recommended adjustment to the engagement strategy.
    pub strategic_shift: String,
}

/// Engagement signal and adjusted score derived from an email reply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailPerformance {
    pub new_score: u32,
    pub engagement_level: EngagementLevel,
    pub performance_report: String,
    /// At most three signals that influenced the score.
    pub key_indicators: Vec<String>,
}
