//! # sully-agents
//!
//! The lead-intelligence agents behind Sully workspaces:
//!
//! - **ICP synthesis** condenses a workspace vision and its recent strategy
//!   chat into a short ideal-customer profile.
//! - **Lead scoring** researches a lead with search grounding and grades it
//!   against that profile. [`parse_score_response`] is the one place model
//!   text becomes a typed [`ScoreResult`].
//! - **Reply and email analysis** runs through an [`AnalysisStrategy`],
//!   either model-backed or the local keyword heuristics, chosen once from
//!   configuration.
//! - **Campaigns** draft outreach for one lead or a CSV batch.
//! - **Knowledge advisor** answers strategy questions and exports the
//!   conversation as a report.
//! - **Task board** simulates agent task progress.
//!
//! [`LeadPipeline`] ties these to a workspace store.

pub mod analysis;
pub mod campaign;
pub mod error;
pub mod heuristics;
pub mod icp;
pub mod knowledge;
pub mod pipeline;
pub mod prompts;
pub mod scorer;
pub mod tasks;

#[cfg(test)]
mod test_support;

pub use analysis::{AnalysisStrategy, LiveAnalysis, OfflineAnalysis, select_strategy};
pub use error::AgentError;
pub use knowledge::Advice;
pub use pipeline::LeadPipeline;
pub use scorer::{ScoreParseError, ScoreResult, parse_score_response};
