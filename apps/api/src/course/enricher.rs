//! Module Enricher: turns a bare module title into an `EnrichedModule`.
//!
//! One text-generation call (summary) and two searches (articles, video).
//! Never fails: any upstream error yields `EnrichedModule::degraded`.

use std::sync::Arc;

use reqwest::Url;
use tracing::warn;

use crate::course::models::{ArticleRef, EnrichedModule, VideoRef};
use crate::course::prompts::{article_query, video_query, SUMMARY_PROMPT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::{OutputFormat, TextGenerator};
use crate::search_client::{SearchEngine, SearchHit, SearchProvider};

/// Max organic results turned into articles.
pub const MAX_ARTICLES: usize = 2;

#[derive(Clone)]
pub struct ModuleEnricher {
    llm: Arc<dyn TextGenerator>,
    search: Arc<dyn SearchProvider>,
}

impl ModuleEnricher {
    pub fn new(llm: Arc<dyn TextGenerator>, search: Arc<dyn SearchProvider>) -> Self {
        Self { llm, search }
    }

    pub async fn enrich(&self, title: &str) -> EnrichedModule {
        match self.try_enrich(title).await {
            Ok(module) => module,
            Err(e) => {
                warn!("Enrichment failed for module '{title}', using placeholder: {e}");
                EnrichedModule::degraded(title)
            }
        }
    }

    async fn try_enrich(&self, title: &str) -> Result<EnrichedModule, AppError> {
        let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{module_title}", title);
        // Prose, not JSON: taken as-is.
        let summary = self.llm.generate(&prompt, OutputFormat::Text).await?;

        let article_hits = self
            .search
            .search(&article_query(title), SearchEngine::Web)
            .await?;
        let video_hits = self
            .search
            .search(&video_query(title), SearchEngine::Video)
            .await?;

        Ok(EnrichedModule {
            title: title.to_string(),
            summary,
            articles: to_articles(article_hits),
            video: to_video(video_hits),
        })
    }
}

/// First `MAX_ARTICLES` hits; hits lacking a title or link are dropped, not padded.
fn to_articles(hits: Vec<SearchHit>) -> Vec<ArticleRef> {
    hits.into_iter()
        .take(MAX_ARTICLES)
        .filter_map(|hit| {
            Some(ArticleRef {
                title: non_blank(hit.title)?,
                url: non_blank(hit.link)?,
            })
        })
        .collect()
}

/// Only the first hit is considered.
fn to_video(hits: Vec<SearchHit>) -> Option<VideoRef> {
    let first = hits.into_iter().next()?;
    let id = video_id(first.link.as_deref()?)?;
    Some(VideoRef {
        title: non_blank(first.title)?,
        id,
    })
}

/// Extracts the YouTube video id from `watch?v=`, `youtu.be/` or `/shorts/` links.
fn video_id(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let mut segments = url.path_segments()?;

    let id = match host {
        "youtu.be" => segments.next()?.to_string(),
        "youtube.com" => match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())?,
            "shorts" | "embed" => segments.next()?.to_string(),
            _ => return None,
        },
        _ => return None,
    };

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
