use clap::Subcommand;

/// Agent task board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AgentCommands {
    /// List the available agents.
    List,
    /// Assign a task to an agent.
    Assign {
        /// lead-scorer, campaign-gen or knowledge-rag
        agent: String,
        description: String,
    },
    /// Advance running tasks.
    Tick {
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Tick on the configured interval until no task is running.
    Watch,
    /// Show the task board.
    Tasks,
    /// Show the activity log, newest first.
    Logs {
        #[arg(long)]
        limit: Option<u32>,
    },
}
