mod batch;

use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignCommands;
use crate::commands::shared::assets::load_assets;
use crate::context::AppContext;
use crate::output::output_text;
use crate::progress::Progress;

/// Handle `sully campaign`.
pub async fn handle(
    action: &CampaignCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CampaignCommands::Generate { lead_id, assets } => {
            let assets = load_assets(assets)?;
            let progress = Progress::spinner("Drafting outreach...");
            let result = ctx
                .pipeline
                .generate_outreach(&ctx.store, lead_id, &assets, Utc::now())
                .await;
            progress.finish_clear();
            output_text("email", &result?, flags.format)
        }
        CampaignCommands::Batch { csv, assets } => batch::run(csv, assets, ctx, flags).await,
        CampaignCommands::TaskDesc { text } => {
            if let Some(text) = text {
                ctx.store.set_task_description(text.trim()).await?;
            }
            let description = ctx.store.task_description().await?;
            output_text("taskDescription", &description, flags.format)
        }
    }
}
