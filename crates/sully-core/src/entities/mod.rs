//! Entity structs for all Sully domain objects.
//!
//! Every entity is owned by exactly one workspace and persisted as JSON under
//! a workspace-scoped key. Field names serialize in camelCase to keep the
//! stored layout stable, and optional fields are omitted rather than written
//! as `null` so a store round trip reproduces the same object graph.

mod agent;
mod analysis;
mod calendar;
mod campaign;
mod chat;
mod inbox;
mod lead;
mod workspace;

pub use agent::{AgentLogEntry, AgentTask};
pub use analysis::{EmailPerformance, ResponseAnalysis};
pub use calendar::CalendarEvent;
pub use campaign::{Asset, BatchRow};
pub use chat::ChatMessage;
pub use inbox::InboxReply;
pub use lead::{GroundingSource, Lead, NewLead, ScoreAssessment, ScoreBreakdown, ScorePoint};
pub use workspace::{WORKSPACE_COLORS, WORKSPACE_ICONS, Workspace, WorkspaceSummary};
