use std::time::Duration;

use chrono::Utc;
use sully_agents::tasks::{self, os_roll};
use sully_core::enums::AgentKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AgentCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sully agent`.
pub async fn handle(
    action: &AgentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AgentCommands::List => {
            let agents = AgentKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "id": kind.as_str(),
                        "name": kind.display_name(),
                        "role": kind.role(),
                    })
                })
                .collect::<Vec<_>>();
            output(&agents, flags.format)
        }
        AgentCommands::Assign { agent, description } => {
            let kind = parse_enum::<AgentKind>(agent, "agent")?;
            let task = tasks::assign_in(&ctx.store, kind, description, Utc::now()).await?;
            output(&task, flags.format)
        }
        AgentCommands::Tick { times } => {
            let mut board = ctx.store.agent_tasks().await?;
            for _ in 0..*times {
                board = tasks::tick_in(&ctx.store, os_roll, Utc::now()).await?;
            }
            output(&board, flags.format)
        }
        AgentCommands::Watch => {
            let period = Duration::from_millis(ctx.config.agents.tick_interval_ms);
            let progress = Progress::spinner("Agents working...");
            let result = tasks::watch_in(&ctx.store, period, os_roll, |board| {
                if let Some(task) = board.iter().find(|t| !t.status.is_terminal()) {
                    progress.set_message(&format!(
                        "{}: {} ({}%)",
                        task.agent_name, task.step, task.progress
                    ));
                }
            })
            .await;
            progress.finish_clear();
            let (board, _ticks) = result?;
            output(&board, flags.format)
        }
        AgentCommands::Tasks => output(&ctx.store.agent_tasks().await?, flags.format),
        AgentCommands::Logs { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut logs = ctx.store.agent_logs().await?;
            logs.truncate(limit);
            output(&logs, flags.format)
        }
    }
}
