use chrono::Utc;
use sully_core::entities::WorkspaceSummary;
use sully_core::enums::InboxStatus;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = &ctx.store;
    let leads = store.list_leads(Utc::now()).await?;
    let open_tasks = store
        .agent_tasks()
        .await?
        .iter()
        .filter(|t| !t.status.is_terminal())
        .count();
    let pending_replies = store
        .inbox()
        .await?
        .iter()
        .filter(|r| r.status == InboxStatus::New)
        .count();
    let summary = WorkspaceSummary::from_leads(
        store.workspace(),
        &leads,
        open_tasks,
        pending_replies,
        store.last_sync().await?,
    );
    output(&summary, flags.format)
}
