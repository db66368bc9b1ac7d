mod add;
mod list;
mod score;
mod update;

use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sully lead`.
pub async fn handle(
    action: &LeadCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LeadCommands::Add {
            name,
            email,
            company,
            industry,
            location,
            title,
            last_contacted,
            skills,
            action,
            response,
        } => {
            let input = add::NewLeadArgs {
                name,
                email,
                company,
                industry: industry.as_deref(),
                location,
                title,
                last_contacted: last_contacted.as_deref(),
                skills: skills.as_deref(),
                action: action.as_deref(),
                response: response.as_deref(),
            };
            add::run(&input, ctx, flags).await
        }
        LeadCommands::List {
            status,
            industry,
            search,
            limit,
        } => {
            let filter = list::LeadFilter {
                status: status.as_deref(),
                industry: industry.as_deref(),
                search: search.as_deref(),
            };
            list::run(&filter, *limit, ctx, flags).await
        }
        LeadCommands::Get { id } => {
            let lead = ctx.store.get_lead(id, Utc::now()).await?;
            output(&lead, flags.format)
        }
        LeadCommands::Update { id, .. } => update::run(id, action, ctx, flags).await,
        LeadCommands::Remove { id } => {
            let lead = ctx.store.remove_lead(id, Utc::now()).await?;
            output(&serde_json::json!({ "removed": lead.id }), flags.format)
        }
        LeadCommands::Score { id } => score::run(id, ctx, flags).await,
        LeadCommands::Trend { id } => score::trend(id, ctx, flags).await,
    }
}
