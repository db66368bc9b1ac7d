use sully_core::enums::ChatRole;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StrategyCommands;
use crate::context::AppContext;
use crate::output::output_text;

/// Handle `sully strategy`.
pub async fn handle(
    action: &StrategyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StrategyCommands::Share { text } => {
            let strategy = match text {
                Some(text) => text.clone(),
                None => ctx
                    .store
                    .chat_history()
                    .await?
                    .into_iter()
                    .rev()
                    .find(|m| m.role == ChatRole::Agent)
                    .map(|m| m.text)
                    .ok_or_else(|| {
                        anyhow::anyhow!("no advisor answer to share yet; run 'sully ask' first")
                    })?,
            };
            if strategy.trim().is_empty() {
                anyhow::bail!("shared strategy must not be blank");
            }
            ctx.store.set_shared_strategy(&strategy).await?;
            output_text("sharedStrategy", &strategy, flags.format)
        }
        StrategyCommands::Show => match ctx.store.shared_strategy().await? {
            Some(strategy) => output_text("sharedStrategy", &strategy, flags.format),
            None => anyhow::bail!("no strategy has been shared in this workspace"),
        },
    }
}
