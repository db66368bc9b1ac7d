//! Knowledge advisor and strategy report export.

use std::fmt::Write as _;

use chrono::NaiveDate;
use sully_core::entities::{ChatMessage, GroundingSource};
use sully_core::enums::{ChatRole, ScoringMode};
use sully_llm::{GenerateRequest, ModelTier, TextModel};

use crate::error::AgentError;
use crate::prompts::format_advisor_prompt;

/// Upper bound on follow-up items pulled from one answer.
pub const MAX_MINITASKS: usize = 5;

/// One advisor answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub text: String,
    pub sources: Vec<GroundingSource>,
    /// Actionable list items found in the answer.
    pub minitasks: Vec<String>,
}

impl Advice {
    /// The chat message this answer is stored as.
    #[must_use]
    pub fn to_message(&self) -> ChatMessage {
        ChatMessage::agent(self.text.clone(), self.sources.clone(), self.minitasks.clone())
    }
}

/// Ask the advisor one question. The advisor is stateless: only the vision
/// and the query are sent.
///
/// # Errors
///
/// Returns [`AgentError::Validation`] for a blank query and
/// [`AgentError::Llm`] if the model call fails.
pub async fn ask(
    model: &dyn TextModel,
    query: &str,
    vision: &str,
    mode: ScoringMode,
) -> Result<Advice, AgentError> {
    if query.trim().is_empty() {
        return Err(AgentError::Validation("query must not be blank".into()));
    }
    let prompt = format_advisor_prompt(query, vision, mode);
    let request = GenerateRequest::text(ModelTier::Pro, prompt).with_search();
    let response = model.generate(request).await?;
    let text = response.text.unwrap_or_default();
    let minitasks = extract_minitasks(&text);
    Ok(Advice {
        text,
        sources: response.sources,
        minitasks,
    })
}

/// Pull bulleted or numbered lines out of an answer, stripped of their
/// markers and emphasis.
#[must_use]
pub fn extract_minitasks(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(list_item)
        .map(|item| item.replace("**", "").trim().to_string())
        .filter(|item| !item.is_empty())
        .take(MAX_MINITASKS)
        .collect()
}

fn list_item(line: &str) -> Option<&str> {
    let line = line.trim_start();
    for marker in ["- ", "* ", "• ", "✓ "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest);
        }
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .or_else(|| line[digits..].strip_prefix(") "))
}

/// Render a workspace conversation as a markdown strategy report.
#[must_use]
pub fn strategy_report(
    workspace_name: &str,
    vision: &str,
    history: &[ChatMessage],
    date: NaiveDate,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Sully.AI Strategy Report - {workspace_name}");
    let _ = writeln!(out, "\n_Confidential intelligence, {date}_\n");
    let _ = writeln!(out, "## Master Vision Context\n\n> {vision}\n");
    let _ = writeln!(out, "## Strategic Dialogue\n");
    if history.is_empty() {
        let _ = writeln!(out, "No history for this workspace.");
        return out;
    }
    for message in history {
        let speaker = match message.role {
            ChatRole::User => "Client Inquiry",
            ChatRole::Agent => "Sully Intelligence Agent",
        };
        let _ = writeln!(out, "### {speaker}\n\n{}\n", message.text.trim());
        if let Some(sources) = message.sources.as_ref().filter(|s| !s.is_empty()) {
            let _ = writeln!(out, "Sources:");
            for source in sources {
                let title = if source.title.is_empty() { &source.uri } else { &source.title };
                let _ = writeln!(out, "- [{title}]({})", source.uri);
            }
            let _ = writeln!(out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sully_llm::GenerateResponse;

    use super::*;
    use crate::test_support::ScriptedModel;

    const ANSWER: &str = "That's a solid direction. I'd recommend:\n\
        1. **Map** the top 20 CISOs in Hyderabad\n\
        2) Build a HIPAA checklist\n\
        - Run a webinar\n\
        * Share two case studies\n\
        • Pilot with one hospital\n\
        ✓ Review pricing\n\
        2024 was a good year.";

    #[test]
    fn minitasks_from_mixed_lists() {
        assert_eq!(
            extract_minitasks(ANSWER),
            vec![
                "Map the top 20 CISOs in Hyderabad",
                "Build a HIPAA checklist",
                "Run a webinar",
                "Share two case studies",
                "Pilot with one hospital",
            ]
        );
    }

    #[test]
    fn no_list_no_minitasks() {
        assert!(extract_minitasks("Just prose.\n2024 was fine.").is_empty());
    }

    #[tokio::test]
    async fn ask_returns_text_sources_and_minitasks() {
        let sources = vec![GroundingSource {
            title: "NASSCOM".into(),
            uri: "https://nasscom.in".into(),
        }];
        let model = ScriptedModel::new(vec![GenerateResponse {
            text: Some(ANSWER.into()),
            sources: sources.clone(),
        }]);

        let advice = ask(&model, "How do we enter Hyderabad?", "Win AP", ScoringMode::Client)
            .await
            .unwrap();

        assert_eq!(advice.sources, sources);
        assert_eq!(advice.minitasks.len(), MAX_MINITASKS);
        let request = model.last_request();
        assert_eq!(request.tier, ModelTier::Pro);
        assert!(request.search_grounding);

        let message = advice.to_message();
        assert_eq!(message.role, ChatRole::Agent);
        assert_eq!(message.sources, Some(sources));
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_calling_model() {
        let model = ScriptedModel::texts(&[]);
        let err = ask(&model, "   ", "v", ScoringMode::Client).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
        assert!(model.requests().is_empty());
    }

    #[test]
    fn report_renders_dialogue() {
        let history = vec![
            ChatMessage::user("How do we price?"),
            ChatMessage::agent(
                "Tiered pricing.",
                vec![GroundingSource {
                    title: String::new(),
                    uri: "https://example.com/pricing".into(),
                }],
                Vec::new(),
            ),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let report = strategy_report("Retail Growth", "Own omnichannel", &history, date);

        assert!(report.starts_with("# Sully.AI Strategy Report - Retail Growth\n"));
        assert!(report.contains("_Confidential intelligence, 2024-06-03_"));
        assert!(report.contains("> Own omnichannel"));
        assert!(report.contains("### Client Inquiry\n\nHow do we price?"));
        assert!(report.contains("- [https://example.com/pricing](https://example.com/pricing)"));
    }

    #[test]
    fn report_without_history() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let report = strategy_report("Retail Growth", "v", &[], date);
        assert!(report.ends_with("No history for this workspace.\n"));
    }
}
