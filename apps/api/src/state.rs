use std::sync::Arc;

use crate::course::assembler::CourseAssembler;
use crate::course::enricher::ModuleEnricher;
use crate::llm_client::TextGenerator;
use crate::search_client::SearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Clients are created once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
    pub enricher: ModuleEnricher,
    pub assembler: CourseAssembler,
}

impl AppState {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        search: Arc<dyn SearchProvider>,
        max_concurrent_enrichments: usize,
    ) -> Self {
        let enricher = ModuleEnricher::new(llm.clone(), search);
        let assembler =
            CourseAssembler::new(llm.clone(), enricher.clone(), max_concurrent_enrichments);
        Self {
            llm,
            enricher,
            assembler,
        }
    }
}
