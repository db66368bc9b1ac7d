use chrono::Utc;
use sully_core::entities::CalendarEvent;
use sully_core::ids::{PREFIX_EVENT, generate_id};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CalendarCommands;
use crate::commands::shared::parse::parse_timestamp;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sully calendar`.
pub async fn handle(
    action: &CalendarCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CalendarCommands::List => output(&ctx.store.calendar_events().await?, flags.format),
        CalendarCommands::Add {
            title,
            start,
            end,
            lead,
            notes,
        } => {
            if title.trim().is_empty() {
                anyhow::bail!("event title must not be blank");
            }
            let start = parse_timestamp(start, "start")?;
            let end = end
                .as_deref()
                .map(|value| parse_timestamp(value, "end"))
                .transpose()?;
            if end.is_some_and(|end| end < start) {
                anyhow::bail!("event end is before its start");
            }
            if let Some(lead) = lead {
                ctx.store.get_lead(lead, Utc::now()).await?;
            }
            let event = CalendarEvent {
                id: generate_id(PREFIX_EVENT)?,
                title: title.trim().to_string(),
                start,
                end,
                lead_id: lead.clone(),
                notes: notes.clone(),
            };
            ctx.store.add_calendar_event(event.clone()).await?;
            output(&event, flags.format)
        }
    }
}
