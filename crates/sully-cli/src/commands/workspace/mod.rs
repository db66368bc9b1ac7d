mod manage;
mod summary;

use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WorkspaceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sully workspace`.
pub async fn handle(
    action: &WorkspaceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorkspaceCommands::List => manage::list(ctx, flags).await,
        WorkspaceCommands::Create { name } => manage::create(name, ctx, flags).await,
        WorkspaceCommands::Remove { id } => manage::remove(id, ctx, flags).await,
        WorkspaceCommands::Switch { workspace } => manage::switch(workspace, ctx, flags).await,
        WorkspaceCommands::Summary => summary::run(ctx, flags).await,
        WorkspaceCommands::Sync => {
            let synced_at = ctx.store.mark_synced(Utc::now()).await?;
            output(
                &serde_json::json!({ "workspace": ctx.store.id(), "lastSync": synced_at }),
                flags.format,
            )
        }
    }
}
