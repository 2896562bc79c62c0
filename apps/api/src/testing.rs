//! In-memory fakes for the external capabilities, shared by unit and router tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::llm_client::{LlmError, OutputFormat, TextGenerator};
use crate::search_client::{SearchEngine, SearchError, SearchHit, SearchProvider};

type LlmFn = dyn Fn(&str, OutputFormat) -> Result<String, LlmError> + Send + Sync;
type SearchFn = dyn Fn(&str, SearchEngine) -> Result<Vec<SearchHit>, SearchError> + Send + Sync;
type DelayFn = dyn Fn(&str) -> Duration + Send + Sync;

pub fn api_error() -> LlmError {
    LlmError::Api {
        status: 503,
        message: "model overloaded".to_string(),
    }
}

pub fn search_api_error() -> SearchError {
    SearchError::Api {
        status: 429,
        message: "quota exceeded".to_string(),
    }
}

pub fn hit(title: &str, link: &str) -> SearchHit {
    SearchHit {
        title: Some(title.to_string()),
        link: Some(link.to_string()),
    }
}

/// Scripted `TextGenerator`. Records every prompt it sees and the order in
/// which calls finish.
pub struct FakeLlm {
    respond: Box<LlmFn>,
    delay: Box<DelayFn>,
    prompts: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl FakeLlm {
    pub fn new(
        respond: impl Fn(&str, OutputFormat) -> Result<String, LlmError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            delay: Box::new(|_| Duration::ZERO),
            prompts: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_, _| Ok(text.clone()))
    }

    pub fn failing() -> Self {
        Self::new(|_, _| Err(api_error()))
    }

    /// Sleeps for `delay(prompt)` before answering.
    pub fn with_delay(mut self, delay: impl Fn(&str) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeLlm {
    async fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let delay = (self.delay)(prompt);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.completed.lock().unwrap().push(prompt.to_string());
        (self.respond)(prompt, format)
    }
}

/// Scripted `SearchProvider`. Records every query it sees.
pub struct FakeSearch {
    respond: Box<SearchFn>,
    queries: Mutex<Vec<(String, SearchEngine)>>,
}

impl FakeSearch {
    pub fn new(
        respond: impl Fn(&str, SearchEngine) -> Result<Vec<SearchHit>, SearchError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(|_, _| Ok(Vec::new()))
    }

    pub fn queries(&self) -> Vec<(String, SearchEngine)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(
        &self,
        query: &str,
        engine: SearchEngine,
    ) -> Result<Vec<SearchHit>, SearchError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), engine));
        (self.respond)(query, engine)
    }
}
