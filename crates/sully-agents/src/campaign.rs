//! Outreach email generation, single and batch.

use sully_core::entities::{Asset, BatchRow};
use sully_core::enums::{BatchStatus, ScoringMode};
use sully_llm::{GenerateRequest, ModelTier, TextModel};

use crate::error::AgentError;
use crate::prompts::format_campaign_prompt;

/// Name used for CSV rows without one.
pub const DEFAULT_NAME: &str = "Prospect";
/// Email used for CSV rows without one.
pub const DEFAULT_EMAIL: &str = "N/A";
/// Company used when the recipient's company is unknown.
pub const DEFAULT_COMPANY: &str = "their company";

/// What every email in a campaign shares.
#[derive(Debug, Clone, Copy)]
pub struct CampaignBrief<'a> {
    pub task_description: &'a str,
    pub shared_strategy: Option<&'a str>,
    pub assets: &'a [Asset],
    pub mode: ScoringMode,
}

/// Draft one outreach email. The model's text is returned verbatim; an empty
/// answer yields an empty string.
///
/// # Errors
///
/// Returns [`AgentError::Llm`] if the model call fails or an attachment is
/// not valid base64.
pub async fn generate_outreach(
    model: &dyn TextModel,
    name: &str,
    company: &str,
    brief: &CampaignBrief<'_>,
) -> Result<String, AgentError> {
    let prompt = format_campaign_prompt(
        name,
        company,
        brief.task_description,
        brief.shared_strategy,
        brief.mode,
    );
    let request = brief
        .assets
        .iter()
        .fold(GenerateRequest::text(ModelTier::Flash, prompt), |req, asset| {
            req.with_inline(asset.mime_type.as_str(), asset.payload())
        });
    let response = model.generate(request).await?;
    Ok(response.text.unwrap_or_default())
}

/// Parse an uploaded recipient list.
///
/// The first line is the header; the name, email and company columns are the
/// first header cells containing `name`, `email` and `company`. Blank lines
/// are skipped and missing cells fall back to [`DEFAULT_NAME`] and
/// [`DEFAULT_EMAIL`].
///
/// # Errors
///
/// Returns [`AgentError::EmptyBatch`] when there are no data rows.
pub fn parse_batch_csv(text: &str) -> Result<Vec<BatchRow>, AgentError> {
    let mut lines = text.lines();
    let header: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .split(',')
        .map(str::to_string)
        .collect();
    let column = |needle: &str| header.iter().position(|h| h.contains(needle));
    let (name_idx, email_idx, company_idx) = (column("name"), column("email"), column("company"));

    let rows: Vec<BatchRow> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let cols: Vec<&str> = line.split(',').collect();
            let cell = |idx: Option<usize>| {
                idx.and_then(|i| cols.get(i))
                    .map(|c| c.trim())
                    .filter(|c| !c.is_empty())
            };
            let mut row = BatchRow::pending(
                cell(name_idx).unwrap_or(DEFAULT_NAME),
                cell(email_idx).unwrap_or(DEFAULT_EMAIL),
            );
            row.company = cell(company_idx).map(str::to_string);
            row
        })
        .collect();

    if rows.is_empty() {
        return Err(AgentError::EmptyBatch);
    }
    Ok(rows)
}

/// Generate an email for every pending row, one at a time.
///
/// A failing row is marked failed with the error recorded and the batch moves
/// on. `on_update` sees each row when it starts and when it finishes.
pub async fn run_batch<F>(
    model: &dyn TextModel,
    rows: &mut [BatchRow],
    brief: &CampaignBrief<'_>,
    mut on_update: F,
) where
    F: FnMut(usize, &BatchRow) + Send,
{
    for (idx, row) in rows.iter_mut().enumerate() {
        if row.status != BatchStatus::Pending {
            continue;
        }
        row.status = BatchStatus::Processing;
        on_update(idx, row);

        let company = row.company.clone().unwrap_or_else(|| DEFAULT_COMPANY.to_string());
        match generate_outreach(model, &row.name, &company, brief).await {
            Ok(content) => {
                row.status = BatchStatus::Completed;
                row.result = Some(content);
            }
            Err(e) => {
                tracing::warn!(row = idx, email = %row.email, error = %e, "batch row failed");
                row.status = BatchStatus::Failed;
                row.message = Some(e.to_string());
            }
        }
        on_update(idx, row);
    }
}
