//! Proficiency assessment: five multiple-choice questions for a target role.

use crate::course::models::{AssessmentQuestion, CourseAssessment};
use crate::course::prompts::ASSESSMENT_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{call_json, TextGenerator};

pub const ASSESSMENT_QUESTION_COUNT: usize = 5;

pub async fn generate_assessment(
    target_role: &str,
    llm: &dyn TextGenerator,
) -> Result<CourseAssessment, AppError> {
    let prompt = ASSESSMENT_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    let assessment: CourseAssessment = call_json(llm, &prompt).await?;
    validate_assessment(&assessment)?;
    Ok(assessment)
}

/// Rejects anything but exactly five answerable questions.
pub fn validate_assessment(assessment: &CourseAssessment) -> Result<(), AppError> {
    let count = assessment.questions.len();
    if count != ASSESSMENT_QUESTION_COUNT {
        return Err(AppError::UpstreamFormat(format!(
            "Assessment must have {ASSESSMENT_QUESTION_COUNT} questions, got {count}"
        )));
    }

    for (index, question) in assessment.questions.iter().enumerate() {
        validate_question(question)
            .map_err(|reason| AppError::UpstreamFormat(format!("Question {index}: {reason}")))?;
    }

    Ok(())
}

fn validate_question(question: &AssessmentQuestion) -> Result<(), String> {
    if question.question_text.trim().is_empty() {
        return Err("questionText is empty".to_string());
    }
    if question.options.is_empty() {
        return Err("options is empty".to_string());
    }
    if !question.options.contains(&question.correct_answer) {
        return Err(format!(
            "correctAnswer '{}' is not one of the options",
            question.correct_answer
        ));
    }
    Ok(())
}
