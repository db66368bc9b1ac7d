use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ActionCommands, AgentCommands, CalendarCommands, CampaignCommands, ChatCommands,
    ConfigCommands, EmailCommands, InboxCommands, LeadCommands, StrategyCommands, VisionCommands,
    WorkspaceCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Workspaces (projects).
    Workspace {
        #[command(subcommand)]
        action: WorkspaceCommands,
    },
    /// Leads in the current workspace.
    Lead {
        #[command(subcommand)]
        action: LeadCommands,
    },
    /// The workspace master vision.
    Vision {
        #[command(subcommand)]
        action: VisionCommands,
    },
    /// Ask the knowledge advisor a strategy question.
    Ask(AskArgs),
    /// Strategy chat history and report export.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Strategy shared from the advisor to campaigns.
    Strategy {
        #[command(subcommand)]
        action: StrategyCommands,
    },
    /// Outreach generation.
    Campaign {
        #[command(subcommand)]
        action: CampaignCommands,
    },
    /// Lead replies.
    Inbox {
        #[command(subcommand)]
        action: InboxCommands,
    },
    /// Email performance analysis.
    Email {
        #[command(subcommand)]
        action: EmailCommands,
    },
    /// Agent task board.
    Agent {
        #[command(subcommand)]
        action: AgentCommands,
    },
    /// Follow-up meetings.
    Calendar {
        #[command(subcommand)]
        action: CalendarCommands,
    },
    /// Custom lead actions.
    Actions {
        #[command(subcommand)]
        action: ActionCommands,
    },
    /// Effective configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Arguments for `sully ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    pub query: String,
}
