use chrono::Utc;
use serde::Serialize;
use sully_core::entities::{InboxReply, ResponseAnalysis};
use sully_core::enums::InboxStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InboxCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplyRow {
    index: usize,
    lead_id: String,
    name: String,
    text: String,
    status: InboxStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    alignment_score: Option<u32>,
}

impl ReplyRow {
    fn new(index: usize, reply: InboxReply) -> Self {
        Self {
            index,
            alignment_score: reply.analysis.as_ref().map(|a| a.alignment_score),
            lead_id: reply.lead_id,
            name: reply.name,
            text: reply.text,
            status: reply.status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzedReply<'a> {
    lead_id: &'a str,
    name: &'a str,
    strategy: &'static str,
    #[serde(flatten)]
    analysis: &'a ResponseAnalysis,
}

/// Handle `sully inbox`.
pub async fn handle(
    action: &InboxCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InboxCommands::List => {
            let rows = ctx
                .store
                .inbox()
                .await?
                .into_iter()
                .enumerate()
                .map(|(index, reply)| ReplyRow::new(index, reply))
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        InboxCommands::Add { lead, text } => {
            let lead = ctx.store.get_lead(lead, Utc::now()).await?;
            let index = ctx
                .store
                .add_reply(InboxReply::new(&lead.id, &lead.name, text))
                .await?;
            let reply = ctx.store.inbox().await?.swap_remove(index);
            output(&ReplyRow::new(index, reply), flags.format)
        }
        InboxCommands::Analyze { index } => {
            let progress = Progress::spinner("Analyzing reply...");
            let result = ctx
                .pipeline
                .analyze_inbox_reply(&ctx.store, *index, Utc::now())
                .await;
            progress.finish_clear();
            let analysis = result?;
            let inbox = ctx.store.inbox().await?;
            let reply = inbox
                .get(*index)
                .ok_or_else(|| anyhow::anyhow!("reply {index} disappeared after analysis"))?;
            output(
                &AnalyzedReply {
                    lead_id: &reply.lead_id,
                    name: &reply.name,
                    strategy: ctx.pipeline.analysis_name(),
                    analysis: &analysis,
                },
                flags.format,
            )
        }
    }
}
