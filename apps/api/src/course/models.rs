//! Request-scoped course data. Nothing here outlives the response that produced it.

use serde::{Deserialize, Serialize};

/// Summary used when a module could not be enriched.
pub const DEGRADED_SUMMARY: &str = "Content generation failed for this module.";

/// A course: name, description and an ordered list of modules.
///
/// `M` is `ModuleStub` straight out of the outline call and `EnrichedModule`
/// once the assembler has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOutline<M = ModuleStub> {
    pub name: String,
    pub description: String,
    pub modules: Vec<M>,
}

impl<M> CourseOutline<M> {
    /// Replaces the module list while keeping name and description.
    pub fn with_modules<N>(self, modules: Vec<N>) -> CourseOutline<N> {
        CourseOutline {
            name: self.name,
            description: self.description,
            modules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStub {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRef {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRef {
    pub title: String,
    #[serde(alias = "youtube_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedModule {
    pub title: String,
    pub summary: String,
    pub articles: Vec<ArticleRef>,
    /// Absent (not `{}`) when no video was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoRef>,
}

impl EnrichedModule {
    /// Placeholder that keeps a failed module's title and position.
    pub fn degraded(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: DEGRADED_SUMMARY.to_string(),
            articles: Vec::new(),
            video: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.summary == DEGRADED_SUMMARY && self.articles.is_empty() && self.video.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub topic: String,
}

/// Proficiency assessment: exactly `ASSESSMENT_QUESTION_COUNT` questions once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAssessment {
    pub questions: Vec<AssessmentQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedialSuggestion {
    pub suggested_module_title: String,
    pub justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enriched_module_without_video_omits_key() {
        let module = EnrichedModule {
            title: "Ownership".to_string(),
            summary: "Who owns what.".to_string(),
            articles: vec![],
            video: None,
        };
        let value = serde_json::to_value(&module).unwrap();
        assert!(value.get("video").is_none());
        assert_eq!(value["articles"], serde_json::json!([]));
    }

    #[test]
    fn test_video_accepts_legacy_youtube_id_key() {
        let video: VideoRef =
            serde_json::from_str(r#"{"title": "Async JS", "youtube_id": "PoRJizFvM7s"}"#).unwrap();
        assert_eq!(video.id, "PoRJizFvM7s");
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["id"], "PoRJizFvM7s");
    }

    #[test]
    fn test_assessment_question_uses_camel_case() {
        let question = AssessmentQuestion {
            question_text: "What does `?` do?".to_string(),
            options: vec!["Propagates errors".to_string(), "Panics".to_string()],
            correct_answer: "Propagates errors".to_string(),
            topic: "Error handling".to_string(),
        };
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["questionText"], "What does `?` do?");
        assert_eq!(value["correctAnswer"], "Propagates errors");
    }

    #[test]
    fn test_degraded_module_shape() {
        let module = EnrichedModule::degraded("Lifetimes");
        assert_eq!(module.title, "Lifetimes");
        assert_eq!(module.summary, DEGRADED_SUMMARY);
        assert!(module.articles.is_empty());
        assert!(module.video.is_none());
        assert!(module.is_degraded());
    }

    #[test]
    fn test_with_modules_keeps_header() {
        let outline = CourseOutline {
            name: "Backend Engineer".to_string(),
            description: "Server-side fundamentals".to_string(),
            modules: vec![ModuleStub {
                title: "HTTP".to_string(),
            }],
        };
        let enriched = outline.with_modules(vec![EnrichedModule::degraded("HTTP")]);
        assert_eq!(enriched.name, "Backend Engineer");
        assert_eq!(enriched.modules.len(), 1);
    }
}
