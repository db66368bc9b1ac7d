use crate::cli::GlobalFlags;
use crate::cli::subcommands::VisionCommands;
use crate::context::AppContext;
use crate::output::output_text;

/// Handle `sully vision`.
pub async fn handle(
    action: &VisionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VisionCommands::Get => {
            let vision = ctx.store.vision().await?;
            output_text("vision", &vision, flags.format)
        }
        VisionCommands::Set { text } => {
            if text.trim().is_empty() {
                anyhow::bail!("vision must not be blank");
            }
            ctx.store.set_vision(text.trim()).await?;
            output_text("vision", text.trim(), flags.format)
        }
    }
}
