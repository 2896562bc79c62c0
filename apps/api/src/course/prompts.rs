// All LLM prompt templates for the course module.
// Templates are filled with `str::replace`; the JSON-only fragment comes from
// llm_client::prompts.

/// Outline prompt. Replace `{target_role}` and `{json_only}`.
pub const OUTLINE_PROMPT_TEMPLATE: &str = r#"You are an expert curriculum designer. Generate a complete course structure for a "{target_role}".

Return a JSON object with this EXACT schema:
{
  "name": "Course name",
  "description": "One or two sentences describing the course",
  "modules": [
    {"title": "Module title"}
  ]
}

"modules" must be an array of 3-5 objects, each with a non-empty "title".
Order the modules the way a learner should take them.

{json_only}"#;

/// Module summary prompt. Replace `{module_title}`. The reply is used verbatim.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are an expert learning research assistant. Write a 2-3 sentence overview of the topic "{module_title}" for a professional who is about to study it.

Respond with plain prose only: no headings, no bullet points, no markdown."#;

/// Proficiency assessment prompt. Replace `{target_role}` and `{json_only}`.
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"You are an expert assessor. Write a proficiency assessment for someone training to become a "{target_role}".

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "questionText": "The question",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": "Option B",
      "topic": "The skill area this question checks"
    }
  ]
}

HARD RULES:
1. Exactly 5 questions.
2. Every question has 4 options.
3. "correctAnswer" must be copied character-for-character from one of that question's "options".
4. Cover a different topic with each question where possible.

{json_only}"#;

/// Remedial suggestion prompt. Replace `{failed_topic}` and `{json_only}`.
pub const REMEDIAL_PROMPT_TEMPLATE: &str = r#"A learner failed assessment questions on the topic "{failed_topic}". Suggest one focused learning module that would close this gap.

Return a JSON object with this EXACT schema:
{
  "suggestedModuleTitle": "Title of the remedial module",
  "justification": "One sentence explaining why this module addresses the gap"
}

{json_only}"#;

/// Fallback justification. Replace `{failed_topic}`.
pub const DEFAULT_JUSTIFICATION_TEMPLATE: &str =
    "This module will help strengthen your understanding of {failed_topic}.";

/// Web search query for a module's reading list.
pub fn article_query(module_title: &str) -> String {
    format!("{module_title} tutorial or guide")
}

/// Video search query for a module.
pub fn video_query(module_title: &str) -> String {
    format!("{module_title} tutorial")
}
