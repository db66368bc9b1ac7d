use anyhow::Context;
use sully_agents::campaign::parse_batch_csv;
use sully_core::enums::BatchStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::assets::load_assets;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(
    csv_path: &str,
    asset_paths: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read batch file {csv_path}"))?;
    let mut rows = parse_batch_csv(&text)?;
    let assets = load_assets(asset_paths)?;

    let progress = Progress::bar(rows.len() as u64, "Generating outreach");
    ctx.pipeline
        .run_batch(&ctx.store, &mut rows, &assets, |_, row| match row.status {
            BatchStatus::Processing => progress.set_message(&row.email),
            BatchStatus::Completed | BatchStatus::Failed => progress.inc(1),
            BatchStatus::Pending => {}
        })
        .await?;
    progress.finish_clear();

    let failed = rows.iter().filter(|r| r.status == BatchStatus::Failed).count();
    if failed > 0 {
        tracing::warn!(failed, total = rows.len(), "some batch rows failed");
    }
    output(&rows, flags.format)
}
