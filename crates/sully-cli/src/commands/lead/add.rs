use chrono::Utc;
use sully_core::entities::NewLead;
use sully_core::enums::Industry;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct NewLeadArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
    pub industry: Option<&'a str>,
    pub location: &'a str,
    pub title: &'a str,
    pub last_contacted: Option<&'a str>,
    pub skills: Option<&'a str>,
    pub action: Option<&'a str>,
    pub response: Option<&'a str>,
}

pub async fn run(
    args: &NewLeadArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("lead name must not be blank");
    }
    let input = NewLead {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        company: args.company.trim().to_string(),
        industry: args
            .industry
            .map(|value| parse_enum::<Industry>(value, "industry"))
            .transpose()?,
        location: args.location.trim().to_string(),
        title: args.title.trim().to_string(),
        last_contacted: args
            .last_contacted
            .map(|value| parse_date(value, "last-contacted"))
            .transpose()?,
        skills: args.skills.map(str::to_string),
        assigned_action: args.action.map(str::to_string),
        last_response: args.response.map(str::to_string),
    };
    let lead = ctx.store.add_lead(input, Utc::now()).await?;
    output(&lead, flags.format)
}
