use anyhow::Context;
use chrono::Utc;
use sully_agents::knowledge::strategy_report;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, output_text};

/// Handle `sully chat`.
pub async fn handle(
    action: &ChatCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChatCommands::History { limit } => {
            let history = ctx.store.chat_history().await?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let skip = history.len().saturating_sub(limit);
            output(&history[skip..], flags.format)
        }
        ChatCommands::Report { output: path } => {
            let report = strategy_report(
                &ctx.store.workspace().name,
                &ctx.store.vision().await?,
                &ctx.store.chat_history().await?,
                Utc::now().date_naive(),
            );
            match path {
                Some(path) => {
                    std::fs::write(path, &report)
                        .with_context(|| format!("failed to write report to {path}"))?;
                    output(&serde_json::json!({ "written": path }), flags.format)
                }
                None => output_text("report", &report, flags.format),
            }
        }
    }
}
