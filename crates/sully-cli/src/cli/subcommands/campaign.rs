use clap::Subcommand;

/// Campaign commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CampaignCommands {
    /// Draft outreach for one lead.
    Generate {
        lead_id: String,
        /// Attach a file (image or PDF); repeatable
        #[arg(long = "asset")]
        assets: Vec<String>,
    },
    /// Draft outreach for every row of a CSV file.
    Batch {
        csv: String,
        #[arg(long = "asset")]
        assets: Vec<String>,
    },
    /// Show or set the campaign task description.
    TaskDesc { text: Option<String> },
}
