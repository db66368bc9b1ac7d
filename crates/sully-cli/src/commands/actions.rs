use crate::cli::GlobalFlags;
use crate::cli::subcommands::ActionCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sully actions`.
pub async fn handle(
    action: &ActionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actions = match action {
        ActionCommands::List => ctx.store.custom_actions().await?,
        ActionCommands::Add { action } => ctx.store.add_custom_action(action).await?,
        ActionCommands::Remove { action } => ctx.store.remove_custom_action(action).await?,
    };
    output(&actions, flags.format)
}
