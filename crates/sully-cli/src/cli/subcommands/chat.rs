use clap::Subcommand;

/// Vision commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VisionCommands {
    /// Show the master vision.
    Get,
    /// Replace the master vision.
    Set { text: String },
}

/// Strategy chat commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Show the conversation.
    History {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Export the conversation as a markdown report.
    Report {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

/// Shared strategy commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StrategyCommands {
    /// Share a strategy with campaigns. Defaults to the latest advisor answer.
    Share { text: Option<String> },
    /// Show the shared strategy.
    Show,
}
