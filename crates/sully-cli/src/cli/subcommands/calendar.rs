use clap::Subcommand;

/// Calendar commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CalendarCommands {
    /// List events, newest first.
    List,
    /// Schedule a follow-up.
    Add {
        #[arg(long)]
        title: String,
        /// RFC 3339 timestamp
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        lead: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

/// Custom lead action commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ActionCommands {
    /// List custom actions.
    List,
    /// Add a custom action.
    Add { action: String },
    /// Remove a custom action.
    Remove { action: String },
}
