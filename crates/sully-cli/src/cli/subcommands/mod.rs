mod agent;
mod calendar;
mod campaign;
mod chat;
mod config;
mod inbox;
mod lead;
mod workspace;

pub use agent::AgentCommands;
pub use calendar::{ActionCommands, CalendarCommands};
pub use campaign::CampaignCommands;
pub use chat::{ChatCommands, StrategyCommands, VisionCommands};
pub use config::ConfigCommands;
pub use inbox::{EmailCommands, InboxCommands};
pub use lead::LeadCommands;
pub use workspace::WorkspaceCommands;
