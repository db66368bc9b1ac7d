use chrono::Utc;
use serde::Serialize;
use sully_core::entities::Lead;
use sully_core::enums::{Industry, LeadStatus};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct LeadFilter<'a> {
    pub status: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub search: Option<&'a str>,
}

/// Compact row for listings; `lead get` shows the full record.
#[derive(Debug, Serialize)]
struct LeadRow {
    id: String,
    name: String,
    company: String,
    industry: Industry,
    location: String,
    status: LeadStatus,
    score: Option<u32>,
}

impl From<Lead> for LeadRow {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            company: lead.company,
            industry: lead.industry,
            location: lead.location,
            status: lead.status,
            score: lead.score,
        }
    }
}

pub async fn run(
    filter: &LeadFilter<'_>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = filter
        .status
        .map(|value| parse_enum::<LeadStatus>(value, "status"))
        .transpose()?;
    let industry = filter
        .industry
        .map(|value| parse_enum::<Industry>(value, "industry"))
        .transpose()?;
    let needle = filter.search.map(str::to_lowercase);
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let leads = ctx
        .store
        .list_leads(Utc::now())
        .await?
        .into_iter()
        .filter(|lead| status.is_none_or(|s| lead.status == s))
        .filter(|lead| industry.is_none_or(|i| lead.industry == i))
        .filter(|lead| needle.as_deref().is_none_or(|n| matches_search(lead, n)))
        .take(limit)
        .map(LeadRow::from)
        .collect::<Vec<_>>();

    output(&leads, flags.format)
}

fn matches_search(lead: &Lead, needle: &str) -> bool {
    [&lead.name, &lead.company, &lead.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
