use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Industry, LeadStatus};

/// A citation returned alongside a search-grounded model response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroundingSource {
    #[serde(default)]
    pub title: String,
    pub uri: String,
}

/// One entry in a lead's score history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScorePoint {
    pub date: DateTime<Utc>,
    pub score: u32,
}

/// Four sub-scores produced next to the headline score.
///
/// In startup mode the axes are read as growth, timing, founder and
/// innovation, but they are stored under the same four names. Sub-scores are
/// not reconciled with the headline score and are not range-checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub industry: u32,
    pub location: u32,
    pub authority: u32,
    pub vision: u32,
}

impl ScoreBreakdown {
    /// Breakdown with every axis set to the same value.
    #[must_use]
    pub const fn uniform(score: u32) -> Self {
        Self {
            industry: score,
            location: score,
            authority: score,
            vision: score,
        }
    }
}

/// The typed outcome of scoring one lead.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScoreAssessment {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub reasoning: String,
    pub sources: Vec<GroundingSource>,
}

/// A prospective contact tracked inside a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: Industry,
    pub location: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_history: Option<Vec<ScorePoint>>,
    pub status: LeadStatus,
    pub last_activity: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icp_reasoning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_response: Option<String>,
    /// How well the lead's latest reply aligns with the workspace goals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_sources: Option<Vec<GroundingSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
}

/// User-supplied fields for a lead that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: Option<Industry>,
    pub location: String,
    pub title: String,
    pub last_contacted: Option<NaiveDate>,
    pub skills: Option<String>,
    pub assigned_action: Option<String>,
    pub last_response: Option<String>,
}

impl Lead {
    /// Build a fresh lead with an empty score history.
    ///
    /// Industry defaults to `tech` and the last-contacted date defaults to
    /// the day the lead is created. Blank optional text is dropped.
    #[must_use]
    pub fn create(id: String, input: NewLead, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            company: input.company,
            industry: input.industry.unwrap_or(Industry::Tech),
            location: input.location,
            title: input.title,
            score: None,
            score_history: Some(Vec::new()),
            status: LeadStatus::New,
            last_activity: now,
            last_contacted: Some(input.last_contacted.unwrap_or_else(|| now.date_naive())),
            icp_reasoning: None,
            last_response: non_blank(input.last_response),
            alignment_score: None,
            skills: non_blank(input.skills),
            assigned_action: non_blank(input.assigned_action),
            score_sources: None,
            score_breakdown: None,
        }
    }

    /// Apply a scoring outcome: append to history, replace score fields and
    /// move the lead to `scored`.
    pub fn apply_assessment(&mut self, assessment: ScoreAssessment, at: DateTime<Utc>) {
        self.score_history
            .get_or_insert_with(Vec::new)
            .push(ScorePoint {
                date: at,
                score: assessment.score,
            });
        self.score = Some(assessment.score);
        self.score_breakdown = Some(assessment.breakdown);
        self.icp_reasoning = Some(assessment.reasoning);
        self.score_sources = Some(assessment.sources);
        self.status = LeadStatus::Scored;
    }

    /// Current score, or zero for a lead that has never been scored.
    #[must_use]
    pub fn score_or_zero(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    /// Number of recorded scoring events.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.score_history.as_ref().map_or(0, Vec::len)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
