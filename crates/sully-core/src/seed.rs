//! Built-in demo workspaces and the data a first visit to each one shows.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::entities::{InboxReply, Lead, ScorePoint, Workspace};
use crate::enums::{Industry, LeadStatus};

/// The three workspaces every fresh installation starts with.
#[must_use]
pub fn default_workspaces() -> Vec<Workspace> {
    [
        ("proj-1", "AP Cybersecurity", "🛡️", "bg-blue-500"),
        ("proj-2", "Karnataka Health", "🏥", "bg-emerald-500"),
        ("proj-3", "Retail Growth", "🛍️", "bg-amber-500"),
    ]
    .into_iter()
    .map(|(id, name, icon, color)| Workspace {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
}

fn history(now: DateTime<Utc>, points: &[(i64, u32)]) -> Option<Vec<ScorePoint>> {
    Some(
        points
            .iter()
            .map(|&(days_ago, score)| ScorePoint {
                date: now - Duration::days(days_ago),
                score,
            })
            .collect(),
    )
}

fn fixed_instant(rfc3339: &str, fallback: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).map_or(fallback, |dt| dt.with_timezone(&Utc))
}

/// The demo lead roster. Score history is anchored to `now`.
#[must_use]
pub fn mock_leads(now: DateTime<Utc>) -> Vec<Lead> {
    vec![
        Lead {
            id: "1".into(),
            name: "Ramesh Babu".into(),
            email: "ramesh.b@apretail.co.in".into(),
            company: "AP Retail Corp".into(),
            industry: Industry::Retail,
            location: "Vijayawada, Andhra Pradesh".into(),
            title: "IT Director".into(),
            score: Some(45),
            score_history: history(now, &[(8, 40), (4, 42), (0, 45)]),
            status: LeadStatus::New,
            last_activity: fixed_instant("2024-05-20T10:30:00Z", now),
            last_contacted: NaiveDate::from_ymd_opt(2024, 5, 15),
            icp_reasoning: None,
            last_response: Some(
                "Looking for a solution that handles multi-store inventory sync.".into(),
            ),
            alignment_score: None,
            skills: None,
            assigned_action: None,
            score_sources: None,
            score_breakdown: None,
        },
        Lead {
            id: "2".into(),
            name: "Anjali Sharma".into(),
            email: "anjali@healthpoint.in".into(),
            company: "HealthPoint India".into(),
            industry: Industry::Healthcare,
            location: "Hyderabad, Telangana".into(),
            title: "Chief Information Security Officer".into(),
            score: Some(72),
            score_history: history(now, &[(10, 85), (3, 75), (0, 72)]),
            status: LeadStatus::New,
            last_activity: fixed_instant("2024-05-21T09:15:00Z", now),
            last_contacted: NaiveDate::from_ymd_opt(2024, 5, 20),
            icp_reasoning: None,
            last_response: Some("Our current priority is HIPAA compliance auditing.".into()),
            alignment_score: None,
            skills: None,
            assigned_action: None,
            score_sources: None,
            score_breakdown: None,
        },
        Lead {
            id: "3".into(),
            name: "Vikram Singh".into(),
            email: "v.singh@indbank.com".into(),
            company: "Industrial Bank of Mumbai".into(),
            industry: Industry::Finance,
            location: "Mumbai, Maharashtra".into(),
            title: "VP Operations".into(),
            score: Some(88),
            score_history: history(now, &[(15, 80), (7, 82), (0, 88)]),
            status: LeadStatus::Scored,
            last_activity: fixed_instant("2024-05-18T14:45:00Z", now),
            last_contacted: NaiveDate::from_ymd_opt(2024, 5, 10),
            icp_reasoning: Some("High fit for cybersecurity services in BFS sector.".into()),
            last_response: Some(
                "Can you provide a technical whitepaper on your encryption standards?".into(),
            ),
            alignment_score: None,
            skills: None,
            assigned_action: None,
            score_sources: None,
            score_breakdown: None,
        },
    ]
}

/// Leads shown by a workspace that has never stored its own list.
#[must_use]
pub fn seed_leads_for(workspace_id: &str, now: DateTime<Utc>) -> Vec<Lead> {
    let keep: fn(Industry) -> bool = match workspace_id {
        "proj-1" => |i| matches!(i, Industry::Tech | Industry::Finance),
        "proj-2" => |i| i == Industry::Healthcare,
        "proj-3" => |i| i == Industry::Retail,
        _ => return Vec::new(),
    };
    mock_leads(now)
        .into_iter()
        .filter(|lead| keep(lead.industry))
        .collect()
}

/// Quick actions offered on the lead board before the user customizes them.
#[must_use]
pub fn default_custom_actions(workspace_id: &str) -> Vec<String> {
    let actions: [&str; 3] = match workspace_id {
        "proj-1" => ["Security Audit", "Vulnerability Report", "Compliance Check"],
        "proj-2" => [
            "Patient Privacy Review",
            "Medical Records Sync",
            "Healthcare Outreach",
        ],
        _ => ["Follow-up Email", "Product Demo", "LinkedIn Outreach"],
    };
    actions.iter().map(ToString::to_string).collect()
}

/// Campaign objective used until the user writes one.
#[must_use]
pub fn default_task_description(workspace_id: &str) -> &'static str {
    match workspace_id {
        "proj-1" => "Secure potential client cloud infra.",
        "proj-2" => "Propose HIPAA compliant storage.",
        _ => "Engage leads with new retail platform.",
    }
}

/// Demo replies waiting in a workspace inbox on first visit.
#[must_use]
pub fn default_inbox(workspace_id: &str) -> Vec<InboxReply> {
    match workspace_id {
        "proj-1" => vec![InboxReply::new(
            "3",
            "Vikram Singh",
            "What's your stance on multi-cloud security?",
        )],
        "proj-2" => vec![InboxReply::new(
            "2",
            "Anjali Sharma",
            "Do you integrate with Indian health stack APIs?",
        )],
        "proj-3" => vec![InboxReply::new(
            "1",
            "Ramesh Babu",
            "Can you help with omnichannel inventory?",
        )],
        _ => Vec::new(),
    }
}

/// Vision statement used until the user writes one.
#[must_use]
pub fn default_vision(workspace_name: &str) -> String {
    format!(
        "Specific strategic objective for {workspace_name}: Build a localized B2B marketing \
         funnel focusing on high-intent decision makers in the region."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeds_are_filtered_per_workspace() {
        let now = Utc::now();
        let ids = |ws: &str| -> Vec<String> {
            seed_leads_for(ws, now).into_iter().map(|l| l.id).collect()
        };
        assert_eq!(ids("proj-1"), vec!["3"]);
        assert_eq!(ids("proj-2"), vec!["2"]);
        assert_eq!(ids("proj-3"), vec!["1"]);
        assert!(ids("proj-1716200000123").is_empty());
    }

    #[test]
    fn seeded_inbox_references_seeded_leads() {
        let now = Utc::now();
        for ws in default_workspaces() {
            let leads = seed_leads_for(&ws.id, now);
            for reply in default_inbox(&ws.id) {
                assert!(
                    leads.iter().any(|l| l.id == reply.lead_id),
                    "reply for {} should resolve in {}",
                    reply.lead_id,
                    ws.id
                );
            }
        }
    }

    #[test]
    fn default_vision_mentions_workspace() {
        assert!(default_vision("Retail Growth").starts_with(
            "Specific strategic objective for Retail Growth: Build a localized B2B"
        ));
    }

    #[test]
    fn custom_actions_fall_back_to_generic() {
        assert_eq!(default_custom_actions("proj-3")[0], "Follow-up Email");
        assert_eq!(default_custom_actions("proj-1")[0], "Security Audit");
    }
}
