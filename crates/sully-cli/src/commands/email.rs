use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmailCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sully email`.
pub async fn handle(
    action: &EmailCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmailCommands::Analyze {
            lead_id,
            text,
            apply,
        } => {
            let progress = Progress::spinner("Grading email engagement...");
            let result = ctx
                .pipeline
                .analyze_email(&ctx.store, lead_id, text, *apply, Utc::now())
                .await;
            progress.finish_clear();
            output(&result?, flags.format)
        }
    }
}
