//! Lead repository.
//!
//! The whole roster is stored as one JSON array. A workspace that has never
//! written its roster reads the demo seed for that workspace; nothing is
//! persisted until the first write.

use chrono::{DateTime, Utc};
use sully_core::entities::{Lead, NewLead, ScoreAssessment};
use sully_core::ids::{PREFIX_LEAD, generate_id};
use sully_core::seed::seed_leads_for;

use crate::error::StoreError;
use crate::keys::WorkspaceEntity;
use crate::workspace::WorkspaceStore;

impl WorkspaceStore {
    /// All leads in this workspace, in stored order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored roster is unreadable.
    pub async fn list_leads(&self, now: DateTime<Utc>) -> Result<Vec<Lead>, StoreError> {
        Ok(self
            .get_json(WorkspaceEntity::LeadsData)
            .await?
            .unwrap_or_else(|| seed_leads_for(self.id(), now)))
    }

    /// Overwrite the roster.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn save_leads(&self, leads: &[Lead]) -> Result<(), StoreError> {
        self.set_json(WorkspaceEntity::LeadsData, &leads).await
    }

    /// # Errors
    ///
    /// Returns `StoreError` if the roster cannot be read.
    pub async fn find_lead(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Lead>, StoreError> {
        Ok(self
            .list_leads(now)
            .await?
            .into_iter()
            .find(|lead| lead.id == id))
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no lead has this id.
    pub async fn get_lead(&self, id: &str, now: DateTime<Utc>) -> Result<Lead, StoreError> {
        self.find_lead(id, now)
            .await?
            .ok_or_else(|| self.lead_not_found(id))
    }

    /// Create a lead with a fresh id and append it to the roster.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if id generation or the write fails.
    pub async fn add_lead(&self, input: NewLead, now: DateTime<Utc>) -> Result<Lead, StoreError> {
        let lead = Lead::create(generate_id(PREFIX_LEAD)?, input, now);
        let mut leads = self.list_leads(now).await?;
        leads.push(lead.clone());
        self.save_leads(&leads).await?;
        tracing::debug!(workspace = %self.id(), lead = %lead.id, "added lead");
        Ok(lead)
    }

    /// Replace the lead with the same id, or append it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read or write fails.
    pub async fn upsert_lead(&self, lead: &Lead, now: DateTime<Utc>) -> Result<(), StoreError> {
        let mut leads = self.list_leads(now).await?;
        match leads.iter_mut().find(|l| l.id == lead.id) {
            Some(existing) => existing.clone_from(lead),
            None => leads.push(lead.clone()),
        }
        self.save_leads(&leads).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no lead has this id.
    pub async fn remove_lead(&self, id: &str, now: DateTime<Utc>) -> Result<Lead, StoreError> {
        let mut leads = self.list_leads(now).await?;
        let pos = leads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| self.lead_not_found(id))?;
        let removed = leads.remove(pos);
        self.save_leads(&leads).await?;
        Ok(removed)
    }

    /// Apply an in-place edit to one lead and persist the roster.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no lead has this id.
    pub async fn update_lead<F>(
        &self,
        id: &str,
        now: DateTime<Utc>,
        edit: F,
    ) -> Result<Lead, StoreError>
    where
        F: FnOnce(&mut Lead) + Send,
    {
        let mut leads = self.list_leads(now).await?;
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| self.lead_not_found(id))?;
        edit(lead);
        let updated = lead.clone();
        self.save_leads(&leads).await?;
        Ok(updated)
    }

    /// Append a scoring outcome to the lead's history and mark it scored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no lead has this id.
    pub async fn record_assessment(
        &self,
        id: &str,
        assessment: ScoreAssessment,
        at: DateTime<Utc>,
    ) -> Result<Lead, StoreError> {
        self.update_lead(id, at, |lead| lead.apply_assessment(assessment, at))
            .await
    }

    fn lead_not_found(&self, id: &str) -> StoreError {
        StoreError::NotFound {
            entity_type: "Lead".to_string(),
            id: id.to_string(),
            workspace_id: self.id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use pretty_assertions::assert_eq;
    use sully_core::entities::{GroundingSource, ScoreBreakdown};
    use sully_core::enums::{Industry, LeadStatus};

    use super::*;
    use crate::test_support::helpers::{scoped, test_kv, test_workspace};

    fn sample_input() -> NewLead {
        NewLead {
            name: "Priya Nair".into(),
            email: "priya@kochilogistics.in".into(),
            company: "Kochi Logistics".into(),
            industry: Some(Industry::Manufacturing),
            location: "Kochi, Kerala".into(),
            title: "CTO".into(),
            ..NewLead::default()
        }
    }

    fn assessment(score: u32) -> ScoreAssessment {
        ScoreAssessment {
            score,
            breakdown: ScoreBreakdown::uniform(score),
            reasoning: format!("scored {score}"),
            sources: vec![GroundingSource {
                title: "Company page".into(),
                uri: "https://example.com".into(),
            }],
        }
    }

    #[tokio::test]
    async fn unseeded_workspace_starts_empty() {
        let store = test_workspace().await;
        assert!(store.list_leads(Utc::now()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_workspace_reads_demo_roster_without_writing() {
        let store = scoped(test_kv().await, "proj-2", "Karnataka Health");
        let leads = store.list_leads(Utc::now()).await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].name, "Anjali Sharma");
        assert!(store.get_text(WorkspaceEntity::LeadsData).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_then_get() {
        let store = test_workspace().await;
        let now = Utc::now();
        let lead = store.add_lead(sample_input(), now).await.unwrap();

        assert!(lead.id.starts_with("led-"));
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(store.get_lead(&lead.id, now).await.unwrap(), lead);
    }

    #[tokio::test]
    async fn get_missing_lead_is_not_found() {
        let store = test_workspace().await;
        let err = store.get_lead("led-00000000", Utc::now()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn roundtrip_preserves_absent_optionals() {
        let store = test_workspace().await;
        let now = Utc::now();
        let lead = store.add_lead(sample_input(), now).await.unwrap();

        let raw = store
            .get_text(WorkspaceEntity::LeadsData)
            .await
            .unwrap()
            .unwrap();
        assert!(!raw.contains("null"), "absent fields must be omitted: {raw}");
        assert!(!raw.contains("icpReasoning"));

        let reloaded = store.list_leads(now).await.unwrap();
        assert_eq!(reloaded, vec![lead]);
    }

    #[tokio::test]
    async fn roundtrip_preserves_fully_populated_lead() {
        let store = test_workspace().await;
        let now = Utc::now();
        let mut lead = Lead::create("led-full0001".into(), sample_input(), now);
        lead.apply_assessment(assessment(64), now);
        lead.alignment_score = Some(70);
        lead.skills = Some("Rust, Kafka".into());
        lead.last_contacted = NaiveDate::from_ymd_opt(2024, 6, 1);

        store.save_leads(std::slice::from_ref(&lead)).await.unwrap();
        assert_eq!(store.get_lead(&lead.id, now).await.unwrap(), lead);
    }

    #[tokio::test]
    async fn history_grows_by_one_per_assessment_in_call_order() {
        let store = test_workspace().await;
        let start = Utc::now();
        let lead = store.add_lead(sample_input(), start).await.unwrap();

        let scores = [41, 77, 12, 90, 55];
        for (i, score) in scores.into_iter().enumerate() {
            let at = start + Duration::seconds(i64::try_from(i).unwrap());
            store
                .record_assessment(&lead.id, assessment(score), at)
                .await
                .unwrap();
        }

        let lead = store.get_lead(&lead.id, start).await.unwrap();
        let history = lead.score_history.unwrap();
        assert_eq!(history.len(), scores.len());
        assert_eq!(
            history.iter().map(|p| p.score).collect::<Vec<_>>(),
            scores.to_vec()
        );
        assert!(history.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(lead.score, Some(55));
        assert_eq!(lead.status, LeadStatus::Scored);
    }

    #[tokio::test]
    async fn upsert_replaces_existing() {
        let store = test_workspace().await;
        let now = Utc::now();
        let mut lead = store.add_lead(sample_input(), now).await.unwrap();
        lead.status = LeadStatus::Nurturing;
        store.upsert_lead(&lead, now).await.unwrap();

        let leads = store.list_leads(now).await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].status, LeadStatus::Nurturing);
    }

    #[tokio::test]
    async fn update_and_remove() {
        let store = test_workspace().await;
        let now = Utc::now();
        let lead = store.add_lead(sample_input(), now).await.unwrap();

        let updated = store
            .update_lead(&lead.id, now, |l| l.assigned_action = Some("Product Demo".into()))
            .await
            .unwrap();
        assert_eq!(updated.assigned_action.as_deref(), Some("Product Demo"));

        store.remove_lead(&lead.id, now).await.unwrap();
        assert!(store.find_lead(&lead.id, now).await.unwrap().is_none());
        assert!(matches!(
            store.remove_lead(&lead.id, now).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn lead_written_in_one_workspace_is_invisible_in_another() {
        let kv = test_kv().await;
        let a = scoped(kv.clone(), "proj-a", "A");
        let b = scoped(kv, "proj-b", "B");
        let now = Utc::now();

        let lead = a.add_lead(sample_input(), now).await.unwrap();

        assert!(b.find_lead(&lead.id, now).await.unwrap().is_none());
        assert!(b.list_leads(now).await.unwrap().is_empty());
    }
}
