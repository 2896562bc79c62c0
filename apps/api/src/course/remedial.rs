//! Remedial suggestion: one follow-up module for a topic the learner failed.

use serde::Deserialize;
use tracing::warn;

use crate::course::models::RemedialSuggestion;
use crate::course::prompts::{DEFAULT_JUSTIFICATION_TEMPLATE, REMEDIAL_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{call_json, TextGenerator};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    suggested_module_title: Option<String>,
    justification: Option<String>,
}

pub async fn generate_remedial_suggestion(
    failed_topic: &str,
    llm: &dyn TextGenerator,
) -> Result<RemedialSuggestion, AppError> {
    let prompt = REMEDIAL_PROMPT_TEMPLATE
        .replace("{failed_topic}", failed_topic)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    let raw: RawSuggestion = call_json(llm, &prompt).await?;
    into_suggestion(raw, failed_topic)
}

fn into_suggestion(raw: RawSuggestion, failed_topic: &str) -> Result<RemedialSuggestion, AppError> {
    let suggested_module_title = raw
        .suggested_module_title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            AppError::UpstreamFormat(
                "Remedial suggestion is missing suggestedModuleTitle".to_string(),
            )
        })?;

    let justification = match raw.justification.filter(|j| !j.trim().is_empty()) {
        Some(justification) => justification,
        None => {
            warn!("Remedial suggestion for '{failed_topic}' had no justification, using default");
            DEFAULT_JUSTIFICATION_TEMPLATE.replace("{failed_topic}", failed_topic)
        }
    };

    Ok(RemedialSuggestion {
        suggested_module_title,
        justification,
    })
}
