//! Course outline generation: the first step of every course request.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::course::models::{CourseOutline, ModuleStub};
use crate::course::prompts::OUTLINE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{call_json, TextGenerator};

/// Outline as the model returns it. Module entries stay untyped so that a
/// single bad entry is skipped instead of failing the whole parse.
#[derive(Debug, Deserialize)]
struct RawOutline {
    name: String,
    description: Option<String>,
    modules: Vec<Value>,
}

/// Asks the model for a course outline and validates its shape.
///
/// A reply that is not JSON, lacks `name`/`modules`, or whose `modules` is not
/// an array is an `UpstreamFormat` error. Module entries without a usable
/// `title` are dropped with a warning.
pub async fn generate_outline(
    target_role: &str,
    llm: &dyn TextGenerator,
) -> Result<CourseOutline, AppError> {
    let prompt = OUTLINE_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    let raw: RawOutline = call_json(llm, &prompt)
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::UpstreamFormat(msg) => {
                AppError::UpstreamFormat(format!("Course outline for '{target_role}': {msg}"))
            }
            other => other,
        })?;

    Ok(into_outline(raw))
}

fn into_outline(raw: RawOutline) -> CourseOutline {
    let total = raw.modules.len();
    let modules: Vec<ModuleStub> = raw
        .modules
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match module_title(&entry) {
            Some(title) => Some(ModuleStub { title }),
            None => {
                warn!("Skipping outline module {index}: missing or empty title ({entry})");
                None
            }
        })
        .collect();

    if modules.len() < total {
        warn!("Outline kept {}/{} modules", modules.len(), total);
    }

    CourseOutline {
        name: raw.name,
        description: raw.description.unwrap_or_default(),
        modules,
    }
}

fn module_title(entry: &Value) -> Option<String> {
    let title = entry.get("title")?.as_str()?.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}
