use chrono::Utc;
use serde::Serialize;
use sully_core::entities::Workspace;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WorkspaceRow {
    id: String,
    name: String,
    icon: String,
    color: String,
    active: bool,
}

pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let active = ctx.registry.active().await?;
    let rows = ctx
        .registry
        .list()
        .await?
        .into_iter()
        .map(|w| WorkspaceRow {
            active: w.id == active.id,
            id: w.id,
            name: w.name,
            icon: w.icon,
            color: w.color,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

pub async fn create(name: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workspace = ctx.registry.create(name, Utc::now()).await?;
    output(&workspace, flags.format)
}

pub async fn remove(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let target = ctx.registry.find(id).await?;
    let removed = ctx.registry.remove(&target.id).await?;
    let active: Workspace = ctx.registry.active().await?;
    output(
        &serde_json::json!({ "removed": removed, "active": active }),
        flags.format,
    )
}

pub async fn switch(workspace: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let active = ctx.registry.set_active(workspace).await?;
    output(&active, flags.format)
}
