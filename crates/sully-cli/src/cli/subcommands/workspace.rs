use clap::Subcommand;

/// Workspace commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// List workspaces.
    List,
    /// Create a workspace and make it active.
    Create { name: String },
    /// Remove a workspace and everything stored in it.
    Remove { id: String },
    /// Make a workspace active.
    Switch { workspace: String },
    /// Dashboard roll-up for the current workspace.
    Summary,
    /// Record a sync of the current workspace.
    Sync,
}
