use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Workspace { action } => commands::workspace::handle(&action, ctx, flags).await,
        Commands::Lead { action } => commands::lead::handle(&action, ctx, flags).await,
        Commands::Vision { action } => commands::vision::handle(&action, ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::Chat { action } => commands::chat::handle(&action, ctx, flags).await,
        Commands::Strategy { action } => commands::strategy::handle(&action, ctx, flags).await,
        Commands::Campaign { action } => commands::campaign::handle(&action, ctx, flags).await,
        Commands::Inbox { action } => commands::inbox::handle(&action, ctx, flags).await,
        Commands::Email { action } => commands::email::handle(&action, ctx, flags).await,
        Commands::Agent { action } => commands::agent::handle(&action, ctx, flags).await,
        Commands::Calendar { action } => commands::calendar::handle(&action, ctx, flags).await,
        Commands::Actions { action } => commands::actions::handle(&action, ctx, flags).await,
        Commands::Config { .. } => unreachable!("config is pre-dispatched in main"),
    }
}
