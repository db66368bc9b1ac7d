use chrono::Utc;
use sully_core::enums::{Industry, LeadStatus};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Apply the `--field` flags given to `lead update`. Any status may be set;
/// moves outside the usual lifecycle are logged.
pub async fn run(
    id: &str,
    action: &LeadCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let LeadCommands::Update {
        name,
        email,
        company,
        industry,
        location,
        title,
        status,
        last_contacted,
        skills,
        action: assigned_action,
        response,
        ..
    } = action
    else {
        anyhow::bail!("lead update called with a different command");
    };

    let industry = industry
        .as_deref()
        .map(|value| parse_enum::<Industry>(value, "industry"))
        .transpose()?;
    let status = status
        .as_deref()
        .map(|value| parse_enum::<LeadStatus>(value, "status"))
        .transpose()?;
    let last_contacted = last_contacted
        .as_deref()
        .map(|value| parse_date(value, "last-contacted"))
        .transpose()?;

    let now = Utc::now();
    let lead = ctx
        .store
        .update_lead(id, now, |lead| {
            set_text(&mut lead.name, name.as_deref());
            set_text(&mut lead.email, email.as_deref());
            set_text(&mut lead.company, company.as_deref());
            set_text(&mut lead.location, location.as_deref());
            set_text(&mut lead.title, title.as_deref());
            if let Some(industry) = industry {
                lead.industry = industry;
            }
            if let Some(status) = status {
                if !lead.status.can_transition_to(status) && lead.status != status {
                    tracing::info!(
                        lead = %lead.id,
                        from = %lead.status,
                        to = %status,
                        "manual status change"
                    );
                }
                lead.status = status;
            }
            if last_contacted.is_some() {
                lead.last_contacted = last_contacted;
            }
            set_optional(&mut lead.skills, skills.as_deref());
            set_optional(&mut lead.assigned_action, assigned_action.as_deref());
            set_optional(&mut lead.last_response, response.as_deref());
            lead.last_activity = now;
        })
        .await?;
    output(&lead, flags.format)
}

fn set_text(field: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        *field = value.trim().to_string();
    }
}

/// An empty value clears the field.
fn set_optional(field: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = value {
        *field = Some(value.trim().to_string()).filter(|v| !v.is_empty());
    }
}
