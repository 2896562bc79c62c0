// Course generation: outline, per-module enrichment, assessment, remediation.
// All LLM calls go through llm_client and all searches through search_client.

pub mod assembler;
pub mod assessment;
pub mod enricher;
pub mod handlers;
pub mod models;
pub mod outline;
pub mod prompts;
pub mod remedial;
