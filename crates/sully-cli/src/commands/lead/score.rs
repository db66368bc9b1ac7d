use chrono::Utc;
use sully_core::trend::{contact_recency, score_trend};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Consulting strategy brain and researching market signals...");
    let result = ctx.pipeline.score_lead(&ctx.store, id, Utc::now()).await;
    match result {
        Ok(lead) => {
            progress.finish_clear();
            output(&lead, flags.format)
        }
        Err(error) => {
            progress.finish_err("scoring failed");
            Err(error.into())
        }
    }
}

pub async fn trend(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let now = Utc::now();
    let lead = ctx.store.get_lead(id, now).await?;
    let trend = lead
        .score_history
        .as_deref()
        .and_then(|history| score_trend(history, now));
    let recency = lead.last_contacted.map(|date| contact_recency(date, now));
    output(
        &serde_json::json!({
            "id": lead.id,
            "score": lead.score,
            "history": lead.history_len(),
            "trend": trend,
            "lastContacted": recency,
        }),
        flags.format,
    )
}
