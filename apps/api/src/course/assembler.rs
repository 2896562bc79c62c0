//! Course Assembler: outline, then concurrent per-module enrichment.
//!
//! Flow: generate_outline → fan out ModuleEnricher over every title (at most
//! `max_concurrency` in flight) → fan in by original index → outline with
//! `EnrichedModule`s in outline order.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use futures::FutureExt;
use tracing::{info, warn};

use crate::course::enricher::ModuleEnricher;
use crate::course::models::{CourseOutline, EnrichedModule, ModuleStub};
use crate::course::outline::generate_outline;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

#[derive(Clone)]
pub struct CourseAssembler {
    llm: Arc<dyn TextGenerator>,
    enricher: ModuleEnricher,
    max_concurrency: usize,
}

impl CourseAssembler {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        enricher: ModuleEnricher,
        max_concurrency: usize,
    ) -> Self {
        Self {
            llm,
            enricher,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Generates the outline for `target_role` and enriches every module.
    ///
    /// Only an outline failure is an error; module failures degrade in place.
    pub async fn assemble_full_course(
        &self,
        target_role: &str,
    ) -> Result<CourseOutline<EnrichedModule>, AppError> {
        let outline = generate_outline(target_role, self.llm.as_ref()).await?;
        info!(
            "Outline for '{}' has {} modules, enriching with concurrency {}",
            target_role,
            outline.modules.len(),
            self.max_concurrency
        );

        let modules = self.enrich_all(&outline.modules).await;

        let degraded = modules.iter().filter(|m| m.is_degraded()).count();
        info!(
            "Assembled course '{}': {} modules ({} degraded)",
            outline.name,
            modules.len(),
            degraded
        );

        Ok(outline.with_modules(modules))
    }

    /// Enriches `stubs` concurrently. Output position `i` always corresponds to `stubs[i]`.
    pub async fn enrich_all(&self, stubs: &[ModuleStub]) -> Vec<EnrichedModule> {
        let enricher = &self.enricher;
        // Owned titles keep the unit futures free of borrows into `stubs`.
        let titles: Vec<String> = stubs.iter().map(|stub| stub.title.clone()).collect();

        let finished: Vec<(usize, Option<EnrichedModule>)> =
            stream::iter(titles.into_iter().enumerate())
                .map(|(index, title)| async move {
                    // A panicking unit only loses its own slot.
                    let result = AssertUnwindSafe(enricher.enrich(&title))
                        .catch_unwind()
                        .await
                        .ok();
                    (index, result)
                })
                .buffer_unordered(self.max_concurrency)
                .collect()
                .await;

        // Each unit writes only its own slot; completion order is irrelevant.
        let mut slots: Vec<Option<EnrichedModule>> = vec![None; stubs.len()];
        for (index, module) in finished {
            slots[index] = module;
        }

        slots
            .into_iter()
            .zip(stubs)
            .map(|(slot, stub)| {
                slot.unwrap_or_else(|| {
                    warn!("Enrichment task for module '{}' aborted", stub.title);
                    EnrichedModule::degraded(&stub.title)
                })
            })
            .collect()
    }
}
