//! Agent error types.

use sully_core::errors::CoreError;
use sully_llm::LlmError;
use sully_store::StoreError;
use thiserror::Error;

use crate::scorer::ScoreParseError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("unparseable score response: {0}")]
    ScoreParse(#[from] ScoreParseError),

    /// Structured model output did not match the requested schema.
    #[error("{agent} returned invalid output: {reason}")]
    InvalidOutput { agent: &'static str, reason: String },

    /// An inbox reply points at a lead this workspace does not hold.
    #[error("Lead not found in this specific workspace. (lead id {lead_id})")]
    LeadNotFound { lead_id: String },

    #[error("no inbox reply at position {0}")]
    ReplyNotFound(usize),

    #[error("no rows found in batch CSV")]
    EmptyBatch,

    #[error("{0}")]
    Validation(String),
}
