use clap::Subcommand;

/// Inbox commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InboxCommands {
    /// List replies.
    List,
    /// Record a reply from a lead.
    Add {
        #[arg(long)]
        lead: String,
        text: String,
    },
    /// Analyze the reply at this position.
    Analyze { index: usize },
}

/// Email commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmailCommands {
    /// Grade an email reply and propose a new score.
    Analyze {
        lead_id: String,
        text: String,
        /// Write the proposed score to the lead
        #[arg(long)]
        apply: bool,
    },
}
