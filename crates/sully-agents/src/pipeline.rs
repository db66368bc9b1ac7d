//! Workspace-backed agent workflows.
//!
//! [`LeadPipeline`] wires the agents to a [`WorkspaceStore`]: it loads what
//! each agent needs from the workspace, runs it, and writes the outcome
//! back. The model is optional so that the offline analysis commands keep
//! working without an API key.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sully_config::SullyConfig;
use sully_core::entities::{
    Asset, BatchRow, ChatMessage, EmailPerformance, Lead, ResponseAnalysis, ScorePoint,
};
use sully_core::enums::{InboxStatus, ScoringMode};
use sully_llm::{LlmError, TextModel};
use sully_store::WorkspaceStore;
use tracing::{info, instrument};

use crate::analysis::{AnalysisStrategy, select_strategy};
use crate::campaign::{self, CampaignBrief, DEFAULT_COMPANY};
use crate::error::AgentError;
use crate::icp::synthesize_icp;
use crate::knowledge::{self, Advice};
use crate::prompts::EmailContext;
use crate::scorer;

pub struct LeadPipeline {
    model: Option<Arc<dyn TextModel>>,
    analysis: Arc<dyn AnalysisStrategy>,
    mode: ScoringMode,
}

impl LeadPipeline {
    #[must_use]
    pub fn new(
        model: Option<Arc<dyn TextModel>>,
        analysis: Arc<dyn AnalysisStrategy>,
        mode: ScoringMode,
    ) -> Self {
        Self {
            model,
            analysis,
            mode,
        }
    }

    /// Build a pipeline from configuration. The analysis strategy is chosen
    /// once here from `agents.strategy`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] when the strategy is `live` and no
    /// model is available.
    pub fn from_config(
        config: &SullyConfig,
        model: Option<Arc<dyn TextModel>>,
        mode: ScoringMode,
    ) -> Result<Self, AgentError> {
        let analysis = select_strategy(config.agents.strategy, model.clone())?;
        Ok(Self::new(model, analysis, mode))
    }

    #[must_use]
    pub const fn mode(&self) -> ScoringMode {
        self.mode
    }

    #[must_use]
    pub fn analysis_name(&self) -> &'static str {
        self.analysis.name()
    }

    fn model(&self) -> Result<&dyn TextModel, AgentError> {
        self.model
            .as_deref()
            .ok_or(AgentError::Llm(LlmError::NotConfigured))
    }

    /// Synthesize the workspace ICP, score one lead against it and record
    /// the result in the lead's history.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if the lead is missing, a model call fails or
    /// the store cannot be read or written.
    #[instrument(skip(self, store), fields(workspace = store.id()))]
    pub async fn score_lead(
        &self,
        store: &WorkspaceStore,
        lead_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Lead, AgentError> {
        let model = self.model()?;
        let lead = store.get_lead(lead_id, now).await?;
        let vision = store.vision().await?;
        let history = store.chat_history().await?;

        let icp = synthesize_icp(model, &vision, &history).await?;
        let assessment = scorer::score_lead(model, &lead, &icp, self.mode).await?;
        let lead = store.record_assessment(lead_id, assessment, now).await?;
        info!(lead = %lead.id, score = lead.score_or_zero(), "lead scored");
        Ok(lead)
    }

    /// Analyze the inbox reply at `index` and mark it analyzed. The lead's
    /// last response and alignment score are updated too.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ReplyNotFound`] for a bad index and
    /// [`AgentError::LeadNotFound`] when the reply's lead is not in this
    /// workspace.
    #[instrument(skip(self, store), fields(workspace = store.id()))]
    pub async fn analyze_inbox_reply(
        &self,
        store: &WorkspaceStore,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<ResponseAnalysis, AgentError> {
        let mut inbox = store.inbox().await?;
        let reply = inbox.get(index).ok_or(AgentError::ReplyNotFound(index))?.clone();
        let lead = store
            .find_lead(&reply.lead_id, now)
            .await?
            .ok_or_else(|| AgentError::LeadNotFound {
                lead_id: reply.lead_id.clone(),
            })?;
        let vision = store.vision().await?;

        let analysis = self.analysis.analyze_reply(&lead, &reply.text, &vision).await?;

        if let Some(entry) = inbox.get_mut(index) {
            entry.status = InboxStatus::Analyzed;
            entry.analysis = Some(analysis.clone());
        }
        store.save_inbox(&inbox).await?;

        let alignment = analysis.alignment_score;
        let text = reply.text;
        store
            .update_lead(&lead.id, now, |l| {
                l.alignment_score = Some(alignment);
                l.last_response = Some(text);
                l.last_activity = now;
            })
            .await?;
        info!(lead = %lead.id, alignment, strategy = self.analysis.name(), "reply analyzed");
        Ok(analysis)
    }

    /// Grade an email reply from a lead. With `apply`, the proposed score is
    /// written to the lead and its history, without touching the breakdown
    /// or status.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if the lead is missing, the analysis fails or
    /// the store cannot be read or written.
    #[instrument(skip(self, store, email), fields(workspace = store.id()))]
    pub async fn analyze_email(
        &self,
        store: &WorkspaceStore,
        lead_id: &str,
        email: &str,
        apply: bool,
        now: DateTime<Utc>,
    ) -> Result<EmailPerformance, AgentError> {
        if email.trim().is_empty() {
            return Err(AgentError::Validation("email text must not be blank".into()));
        }
        let lead = store.get_lead(lead_id, now).await?;
        let vision = store.vision().await?;
        let ctx = EmailContext {
            lead_name: &lead.name,
            lead_company: &lead.company,
            current_score: lead.score_or_zero(),
            email,
            vision: &vision,
            mode: self.mode,
        };
        let performance = self.analysis.analyze_email(&ctx).await?;

        if apply {
            let score = performance.new_score;
            let text = email.to_string();
            store
                .update_lead(lead_id, now, |l| {
                    l.score = Some(score);
                    l.score_history
                        .get_or_insert_with(Vec::new)
                        .push(ScorePoint { date: now, score });
                    l.last_response = Some(text);
                    l.last_activity = now;
                })
                .await?;
        }
        Ok(performance)
    }

    /// Ask the knowledge advisor. The question is appended to the workspace
    /// chat before the model is called; the answer follows on success.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if the query is blank, the model call fails or
    /// the chat cannot be saved.
    #[instrument(skip(self, store, query), fields(workspace = store.id()))]
    pub async fn ask_advisor(
        &self,
        store: &WorkspaceStore,
        query: &str,
    ) -> Result<Advice, AgentError> {
        let model = self.model()?;
        if query.trim().is_empty() {
            return Err(AgentError::Validation("query must not be blank".into()));
        }
        let vision = store.vision().await?;
        store.append_chat(&[ChatMessage::user(query)]).await?;
        let advice = knowledge::ask(model, query, &vision, self.mode).await?;
        store.append_chat(&[advice.to_message()]).await?;
        Ok(advice)
    }

    /// Draft outreach for one lead using the workspace campaign settings.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if the lead is missing or the model call fails.
    #[instrument(skip(self, store, assets), fields(workspace = store.id()))]
    pub async fn generate_outreach(
        &self,
        store: &WorkspaceStore,
        lead_id: &str,
        assets: &[Asset],
        now: DateTime<Utc>,
    ) -> Result<String, AgentError> {
        let model = self.model()?;
        let lead = store.get_lead(lead_id, now).await?;
        let task = store.task_description().await?;
        let shared = store.shared_strategy().await?;
        let brief = CampaignBrief {
            task_description: &task,
            shared_strategy: shared.as_deref(),
            assets,
            mode: self.mode,
        };
        let company = if lead.company.trim().is_empty() {
            DEFAULT_COMPANY
        } else {
            lead.company.as_str()
        };
        campaign::generate_outreach(model, &lead.name, company, &brief).await
    }

    /// Run a CSV batch with the workspace campaign settings.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] if no model is configured or the workspace
    /// settings cannot be read. Row failures are recorded on the rows.
    pub async fn run_batch<F>(
        &self,
        store: &WorkspaceStore,
        rows: &mut [BatchRow],
        assets: &[Asset],
        on_update: F,
    ) -> Result<(), AgentError>
    where
        F: FnMut(usize, &BatchRow) + Send,
    {
        let model = self.model()?;
        let task = store.task_description().await?;
        let shared = store.shared_strategy().await?;
        let brief = CampaignBrief {
            task_description: &task,
            shared_strategy: shared.as_deref(),
            assets,
            mode: self.mode,
        };
        campaign::run_batch(model, rows, &brief, on_update).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use sully_core::entities::InboxReply;
    use sully_core::enums::{BatchStatus, ChatRole, LeadStatus};
    use sully_llm::ModelTier;

    use super::*;
    use crate::analysis::OfflineAnalysis;
    use crate::campaign::parse_batch_csv;
    use crate::test_support::{ScriptedModel, seeded_store};

    fn offline(model: Option<Arc<ScriptedModel>>) -> LeadPipeline {
        LeadPipeline::new(
            model.map(|m| m as Arc<dyn TextModel>),
            Arc::new(OfflineAnalysis),
            ScoringMode::Client,
        )
    }

    #[tokio::test]
    async fn scoring_appends_history_in_call_order() {
        let store = seeded_store("proj-1").await;
        let now = Utc::now();
        let before = store.get_lead("3", now).await.unwrap().history_len();

        let model = Arc::new(ScriptedModel::texts(&[
            "ICP one",
            "SCORE: 61\nREASONING: first pass",
            "ICP two",
            "SCORE: 74\nINDUSTRY: 80\nLOCATION: 70\nAUTHORITY: 75\nVISION: 71\nREASONING: second",
        ]));
        let pipeline = offline(Some(model.clone()));

        pipeline.score_lead(&store, "3", now).await.unwrap();
        let lead = pipeline.score_lead(&store, "3", now).await.unwrap();

        assert_eq!(lead.history_len(), before + 2);
        let scores: Vec<u32> = lead
            .score_history
            .unwrap()
            .iter()
            .rev()
            .take(2)
            .map(|p| p.score)
            .collect();
        assert_eq!(scores, vec![74, 61]);
        assert_eq!(lead.score, Some(74));
        assert_eq!(lead.status, LeadStatus::Scored);
        assert_eq!(lead.icp_reasoning.as_deref(), Some("second"));

        let requests = model.requests();
        assert_eq!(requests.len(), 4);
        assert_eq!(requests[0].tier, ModelTier::Flash);
        assert_eq!(requests[1].tier, ModelTier::Pro);
        assert!(requests[1].prompt_text().contains("ICP one"));
    }

    #[tokio::test]
    async fn scoring_reads_the_workspace_chat() {
        let store = seeded_store("proj-1").await;
        store
            .append_chat(&[ChatMessage::user("Pivot to fintech CISOs")])
            .await
            .unwrap();
        let model = Arc::new(ScriptedModel::texts(&["ICP", "SCORE: 50"]));
        offline(Some(model.clone()))
            .score_lead(&store, "3", Utc::now())
            .await
            .unwrap();
        assert!(model.requests()[0].prompt_text().contains("USER: Pivot to fintech CISOs"));
    }

    #[tokio::test]
    async fn scoring_without_model_is_not_configured() {
        let store = seeded_store("proj-1").await;
        let err = offline(None).score_lead(&store, "3", Utc::now()).await.unwrap_err();
        assert!(matches!(err, AgentError::Llm(LlmError::NotConfigured)));
    }

    #[tokio::test]
    async fn inbox_reply_is_analyzed_offline() {
        let store = seeded_store("proj-1").await;
        let now = Utc::now();
        let idx = store
            .add_reply(InboxReply::new(
                "3",
                "Vikram Singh",
                "Can you share a case study? We need pricing before Q3.",
            ))
            .await
            .unwrap();

        let analysis = offline(None).analyze_inbox_reply(&store, idx, now).await.unwrap();

        let inbox = store.inbox().await.unwrap();
        assert_eq!(inbox[idx].status, InboxStatus::Analyzed);
        assert_eq!(inbox[idx].analysis.as_ref(), Some(&analysis));
        let lead = store.get_lead("3", now).await.unwrap();
        assert_eq!(lead.alignment_score, Some(analysis.alignment_score));
        assert!(lead.last_response.unwrap().contains("case study"));
    }

    #[tokio::test]
    async fn inbox_reply_for_foreign_lead_is_rejected() {
        let store = seeded_store("proj-1").await;
        let idx = store
            .add_reply(InboxReply::new("999", "Ghost", "hello"))
            .await
            .unwrap();
        let err = offline(None)
            .analyze_inbox_reply(&store, idx, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::LeadNotFound { ref lead_id } if lead_id == "999"));
        assert!(err.to_string().starts_with("Lead not found in this specific workspace."));
        assert_eq!(store.inbox().await.unwrap()[idx].status, InboxStatus::New);
    }

    #[tokio::test]
    async fn missing_reply_index() {
        let store = seeded_store("proj-1").await;
        let err = offline(None)
            .analyze_inbox_reply(&store, 42, Utc::now())
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::ReplyNotFound(42)));
    }

    #[tokio::test]
    async fn email_analysis_applies_score_when_asked() {
        let store = seeded_store("proj-1").await;
        let now = Utc::now();
        let lead = store.get_lead("3", now).await.unwrap();
        let before = lead.history_len();
        let pipeline = offline(None);

        let dry = pipeline
            .analyze_email(&store, "3", "Can we schedule a call next week?", false, now)
            .await
            .unwrap();
        assert_eq!(store.get_lead("3", now).await.unwrap().history_len(), before);

        let applied = pipeline
            .analyze_email(&store, "3", "Can we schedule a call next week?", true, now)
            .await
            .unwrap();
        assert_eq!(dry, applied);
        let lead = store.get_lead("3", now).await.unwrap();
        assert_eq!(lead.score, Some(applied.new_score));
        assert_eq!(lead.history_len(), before + 1);
    }

    #[tokio::test]
    async fn advisor_exchange_is_appended_to_chat() {
        let store = seeded_store("proj-2").await;
        let model = Arc::new(ScriptedModel::texts(&["Focus on:\n- Tier-2 hospitals"]));
        let advice = offline(Some(model))
            .ask_advisor(&store, "Where should we start?")
            .await
            .unwrap();
        assert_eq!(advice.minitasks, vec!["Tier-2 hospitals"]);

        let chat = store.chat_history().await.unwrap();
        assert_eq!(chat.len(), 2);
        assert_eq!(chat[0].role, ChatRole::User);
        assert_eq!(chat[1].role, ChatRole::Agent);
        assert_eq!(chat[1].minitasks.as_deref(), Some(&["Tier-2 hospitals".to_string()][..]));
    }

    #[tokio::test]
    async fn failed_advisor_call_keeps_the_question() {
        let store = seeded_store("proj-2").await;
        let model = Arc::new(ScriptedModel::texts(&[]));
        let err = offline(Some(model))
            .ask_advisor(&store, "Which hospitals first?")
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Llm(_)));

        let chat = store.chat_history().await.unwrap();
        assert_eq!(chat.len(), 1);
        assert_eq!(chat[0].role, ChatRole::User);
        assert_eq!(chat[0].text, "Which hospitals first?");
    }

    #[tokio::test]
    async fn blank_advisor_query_appends_nothing() {
        let store = seeded_store("proj-2").await;
        let model = Arc::new(ScriptedModel::texts(&["unused"]));
        let err = offline(Some(model)).ask_advisor(&store, "  ").await.unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
        assert!(store.chat_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn outreach_uses_workspace_campaign_settings() {
        let store = seeded_store("proj-2").await;
        store.set_shared_strategy("Lead with ABDM compliance").await.unwrap();
        store.set_task_description("Book discovery calls").await.unwrap();
        let model = Arc::new(ScriptedModel::texts(&["Dear Anjali, ..."]));

        let email = offline(Some(model.clone()))
            .generate_outreach(&store, "2", &[], Utc::now())
            .await
            .unwrap();

        assert_eq!(email, "Dear Anjali, ...");
        let prompt = model.last_request().prompt_text();
        assert!(prompt.contains("Lead with ABDM compliance"));
        assert!(prompt.contains("Book discovery calls"));
    }

    #[tokio::test]
    async fn batch_runs_every_row() {
        let store = seeded_store("proj-3").await;
        let model = Arc::new(ScriptedModel::texts(&["one", "two"]));
        let mut rows = parse_batch_csv("name,email\nA,a@x.in\nB,b@x.in").unwrap();

        offline(Some(model))
            .run_batch(&store, &mut rows, &[], |_, _| {})
            .await
            .unwrap();

        assert!(rows.iter().all(|r| r.status == BatchStatus::Completed));
        assert_eq!(rows[1].result.as_deref(), Some("two"));
    }
}
