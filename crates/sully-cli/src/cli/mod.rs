use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sully` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sully",
    version,
    about = "Sully - lead scoring and ICP strategy workspaces"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace id or name (defaults to the active workspace)
    #[arg(short, long, global = true)]
    pub workspace: Option<String>,

    /// Grade leads and replies as startup prospects instead of clients
    #[arg(long, global = true)]
    pub startup: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            workspace: self.workspace.clone(),
            startup: self.startup,
        }
    }
}
