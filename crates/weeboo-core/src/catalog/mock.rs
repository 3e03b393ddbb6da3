//! Mock catalog backend for testing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{CatalogBackend, CatalogResult};
use crate::{CatalogError, Entry};

/// A configurable mock response for [`MockCatalog`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful response with these entries.
    Entries(Vec<Entry>),
    /// Simulate a transport or decoding failure.
    Error(String),
}

/// A hand-rolled mock implementing [`CatalogBackend`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - Optional per-call latency, or a sequence of latencies to force
///   out-of-order completion.
/// - Call counting and query recording.
pub struct MockCatalog {
    /// Pending responses, reversed so `pop()` yields the next one.
    responses: Mutex<Vec<MockResponse>>,
    fallback: MockResponse,
    delays: Mutex<Vec<Duration>>,
    call_count: AtomicUsize,
    /// `None` for default listings, `Some(text)` for searches.
    queries: Mutex<Vec<Option<String>>>,
}

impl MockCatalog {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            delays: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        let fallback = responses[responses.len() - 1].clone();
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            fallback,
            ..Self::new(MockResponse::Entries(Vec::new()))
        }
    }

    /// Set one latency per call, in call order. Calls past the end have none.
    pub fn with_delays(self, mut delays: Vec<Duration>) -> Self {
        delays.reverse();
        *self.delays.lock().unwrap() = delays;
        self
    }

    /// How many requests have been issued.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Recorded requests in call order.
    pub fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().unwrap().clone()
    }

    fn next(&self, query: Option<&str>) -> (MockResponse, Option<Duration>) {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.map(String::from));
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| self.fallback.clone());
        let delay = self.delays.lock().unwrap().pop();
        (response, delay)
    }

    fn respond<'a>(
        &'a self,
        query: Option<&str>,
    ) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>> {
        let (response, delay) = self.next(query);
        Box::pin(async move {
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            match response {
                MockResponse::Entries(entries) => Ok(entries),
                MockResponse::Error(msg) => Err(CatalogError::Other(msg)),
            }
        })
    }
}

impl CatalogBackend for MockCatalog {
    fn name(&self) -> &str {
        "Mock"
    }

    fn list_default<'a>(&'a self) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>> {
        self.respond(None)
    }

    fn search_titles<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>> {
        self.respond(Some(text))
    }
}
