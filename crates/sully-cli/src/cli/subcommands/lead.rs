use clap::Subcommand;

/// Lead commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LeadCommands {
    /// Add a lead.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        company: String,
        /// retail, healthcare, finance, manufacturing or tech
        #[arg(long)]
        industry: Option<String>,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        last_contacted: Option<String>,
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        response: Option<String>,
    },
    /// List leads.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        /// Case-insensitive match on name, company or location
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a lead by ID.
    Get { id: String },
    /// Update lead fields.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        last_contacted: Option<String>,
        #[arg(long)]
        skills: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        response: Option<String>,
    },
    /// Remove a lead.
    Remove { id: String },
    /// Score a lead against the workspace ICP.
    Score { id: String },
    /// Score movement over the last week.
    Trend { id: String },
}
