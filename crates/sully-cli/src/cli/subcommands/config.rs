use clap::Subcommand;

/// Config commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets masked.
    Show,
}
