//! Lead scorer and the parsing boundary for its free-text answers.
//!
//! The model answers in three labelled sections:
//!
//! ```text
//! SCORE: 72
//! BREAKDOWN: [INDUSTRY:80, LOCATION:60, AUTHORITY:70, VISION:75]
//! REASONING: ...
//! ```
//!
//! Startup framing uses `GROWTH/TIMING/FOUNDER/INNOVATION` instead. Both label
//! sets are accepted in either mode, brackets are optional and matching is
//! case-insensitive. Values are taken as given: nothing is clamped to 0-100
//! and the breakdown is not reconciled with the headline score.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use sully_core::entities::{GroundingSource, Lead, ScoreAssessment, ScoreBreakdown};
use sully_core::enums::ScoringMode;
use sully_llm::{GenerateRequest, ModelTier, TextModel};
use thiserror::Error;

use crate::error::AgentError;
use crate::prompts::format_scorer_prompt;

/// Reasoning used when the answer has no `REASONING:` section.
pub const DEFAULT_REASONING: &str = "Dynamic analysis completed.";

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SCORE:\s*\[?\s*(\d+)").expect("static pattern compiles"));

static CLIENT_BREAKDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)BREAKDOWN:\s*\[?\s*INDUSTRY:\s*(\d+)\s*,\s*LOCATION:\s*(\d+)\s*,\s*AUTHORITY:\s*(\d+)\s*,\s*VISION:\s*(\d+)",
    )
    .expect("static pattern compiles")
});

static STARTUP_BREAKDOWN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)BREAKDOWN:\s*\[?\s*GROWTH:\s*(\d+)\s*,\s*TIMING:\s*(\d+)\s*,\s*FOUNDER:\s*(\d+)\s*,\s*INNOVATION:\s*(\d+)",
    )
    .expect("static pattern compiles")
});

static REASONING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)REASONING:\s*([\s\S]+)").expect("static pattern compiles")
});

/// Why a scorer answer could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreParseError {
    #[error("no SCORE section")]
    MissingScore,

    #[error("{field} value '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },
}

/// A parsed scorer answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u32,
    /// Mapped onto the client axes whichever label set was used.
    pub breakdown: ScoreBreakdown,
    pub reasoning: String,
}

impl ScoreResult {
    /// Parse with the documented degradation instead of failing. Each section
    /// degrades on its own: an absent or unreadable score becomes 0, an absent
    /// or unreadable breakdown repeats the headline score and a missing
    /// reasoning becomes [`DEFAULT_REASONING`].
    #[must_use]
    pub fn from_text_lenient(text: &str, mode: ScoringMode) -> Self {
        let score = match find_score(text) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(error = %e, "scorer answer has no usable score, recording 0");
                0
            }
        };
        let breakdown = match find_breakdown(text, mode) {
            Ok(Some(breakdown)) => breakdown,
            Ok(None) => ScoreBreakdown::uniform(score),
            Err(e) => {
                tracing::warn!(error = %e, "scorer breakdown unreadable, repeating score");
                ScoreBreakdown::uniform(score)
            }
        };
        Self {
            score,
            breakdown,
            reasoning: find_reasoning(text),
        }
    }

    #[must_use]
    pub fn into_assessment(self, sources: Vec<GroundingSource>) -> ScoreAssessment {
        ScoreAssessment {
            score: self.score,
            breakdown: self.breakdown,
            reasoning: self.reasoning,
            sources,
        }
    }
}

/// Convert an untrusted scorer answer into a [`ScoreResult`].
///
/// # Errors
///
/// Returns [`ScoreParseError::MissingScore`] when there is no `SCORE:`
/// section and [`ScoreParseError::InvalidNumber`] when a number overflows.
pub fn parse_score_response(
    text: &str,
    mode: ScoringMode,
) -> Result<ScoreResult, ScoreParseError> {
    let score = find_score(text)?;
    let breakdown = find_breakdown(text, mode)?.unwrap_or_else(|| ScoreBreakdown::uniform(score));
    Ok(ScoreResult {
        score,
        breakdown,
        reasoning: find_reasoning(text),
    })
}

fn find_score(text: &str) -> Result<u32, ScoreParseError> {
    SCORE_RE
        .captures(text)
        .ok_or(ScoreParseError::MissingScore)
        .and_then(|c| number(&c, 1, "SCORE"))
}

fn find_breakdown(
    text: &str,
    mode: ScoringMode,
) -> Result<Option<ScoreBreakdown>, ScoreParseError> {
    let (preferred, other): (&Regex, &Regex) = if mode.is_startup() {
        (&*STARTUP_BREAKDOWN_RE, &*CLIENT_BREAKDOWN_RE)
    } else {
        (&*CLIENT_BREAKDOWN_RE, &*STARTUP_BREAKDOWN_RE)
    };
    let Some(caps) = preferred.captures(text).or_else(|| other.captures(text)) else {
        return Ok(None);
    };
    Ok(Some(ScoreBreakdown {
        industry: number(&caps, 1, "BREAKDOWN")?,
        location: number(&caps, 2, "BREAKDOWN")?,
        authority: number(&caps, 3, "BREAKDOWN")?,
        vision: number(&caps, 4, "BREAKDOWN")?,
    }))
}

fn find_reasoning(text: &str) -> String {
    REASONING_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REASONING.to_string())
}

fn number(caps: &Captures<'_>, idx: usize, field: &'static str) -> Result<u32, ScoreParseError> {
    let raw = caps.get(idx).map_or("", |m| m.as_str());
    raw.parse().map_err(|_| ScoreParseError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

/// Research a lead with search grounding and grade it against `dynamic_icp`.
///
/// Malformed answers degrade to defaults (see [`ScoreResult::from_text_lenient`]);
/// only transport and API failures are errors.
///
/// # Errors
///
/// Returns [`AgentError::Llm`] if the model call fails.
pub async fn score_lead(
    model: &dyn TextModel,
    lead: &Lead,
    dynamic_icp: &str,
    mode: ScoringMode,
) -> Result<ScoreAssessment, AgentError> {
    let prompt = format_scorer_prompt(lead, dynamic_icp, mode);
    let request = GenerateRequest::text(ModelTier::Pro, prompt).with_search();
    let response = model.generate(request).await?;
    let result = ScoreResult::from_text_lenient(response.text_or_empty(), mode);
    tracing::debug!(
        lead = %lead.id,
        score = result.score,
        sources = response.sources.len(),
        "scored lead"
    );
    Ok(result.into_assessment(response.sources))
}
