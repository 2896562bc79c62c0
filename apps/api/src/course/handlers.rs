//! Axum route handlers for the course generation API.
//!
//! Bodies are extracted as `Option<Json<_>>` with optional fields so that an
//! absent body, a non-JSON body and a missing field all answer
//! 400 `{"error": "Missing <field>"}` before any upstream call is made.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::course::assessment::generate_assessment;
use crate::course::models::{CourseAssessment, CourseOutline, EnrichedModule, RemedialSuggestion};
use crate::course::outline::generate_outline;
use crate::course::remedial::generate_remedial_suggestion;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct TargetRoleRequest {
    pub target_role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModuleTitleRequest {
    pub module_title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FailedTopicRequest {
    pub failed_topic: Option<String>,
}

/// Returns the trimmed field value, or a 400 naming the field.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::missing_field(field))
}

fn target_role(payload: Option<Json<TargetRoleRequest>>) -> Result<String, AppError> {
    required(payload.and_then(|Json(body)| body.target_role), "target_role")
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-course
///
/// Outline only: name, description and module titles.
pub async fn handle_generate_course(
    State(state): State<AppState>,
    payload: Option<Json<TargetRoleRequest>>,
) -> Result<Json<CourseOutline>, AppError> {
    let target_role = target_role(payload)?;
    info!("Generating course outline for '{target_role}'");

    let outline = generate_outline(&target_role, state.llm.as_ref()).await?;
    Ok(Json(outline))
}

/// POST /generate-proficiency-assessment
pub async fn handle_generate_assessment(
    State(state): State<AppState>,
    payload: Option<Json<TargetRoleRequest>>,
) -> Result<Json<CourseAssessment>, AppError> {
    let target_role = target_role(payload)?;
    info!("Generating proficiency assessment for '{target_role}'");

    let assessment = generate_assessment(&target_role, state.llm.as_ref()).await?;
    Ok(Json(assessment))
}

/// POST /generate-module-content
///
/// Enriches a single module. Upstream failures come back as a degraded module, not a 500.
pub async fn handle_generate_module_content(
    State(state): State<AppState>,
    payload: Option<Json<ModuleTitleRequest>>,
) -> Result<Json<EnrichedModule>, AppError> {
    let module_title = required(
        payload.and_then(|Json(body)| body.module_title),
        "module_title",
    )?;
    info!("Generating content for module '{module_title}'");

    Ok(Json(state.enricher.enrich(&module_title).await))
}

/// POST /generate-remedial-suggestion
pub async fn handle_generate_remedial_suggestion(
    State(state): State<AppState>,
    payload: Option<Json<FailedTopicRequest>>,
) -> Result<Json<RemedialSuggestion>, AppError> {
    let failed_topic = required(
        payload.and_then(|Json(body)| body.failed_topic),
        "failed_topic",
    )?;
    info!("Generating remedial suggestion for '{failed_topic}'");

    let suggestion = generate_remedial_suggestion(&failed_topic, state.llm.as_ref()).await?;
    Ok(Json(suggestion))
}

/// POST /generate-full-course-content
///
/// Outline plus concurrent enrichment of every module, in outline order.
pub async fn handle_generate_full_course_content(
    State(state): State<AppState>,
    payload: Option<Json<TargetRoleRequest>>,
) -> Result<Json<CourseOutline<EnrichedModule>>, AppError> {
    let target_role = target_role(payload)?;
    info!("Generating full course content for '{target_role}'");

    let course = state.assembler.assemble_full_course(&target_role).await?;
    Ok(Json(course))
}
