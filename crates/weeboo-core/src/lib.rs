//! Catalog client and search/selection state for the WeeBoo anime browser.
//!
//! The [`catalog`] module talks to the Jikan API (or any other
//! [`CatalogBackend`]); [`state`] holds the current result collection, the
//! selected entry and the query text, and decides which responses are fresh
//! enough to apply.

use thiserror::Error;

pub mod catalog;
pub mod state;

// Re-export for convenience
pub use catalog::jikan::{DEFAULT_BASE_URL, JikanCatalog};
pub use catalog::{CatalogBackend, CatalogResult, fetch_default, search};
pub use state::{CatalogState, Ticket};

/// Identifier of a catalog entry (Jikan's `mal_id`).
pub type EntryId = u64;

/// One anime as returned by the catalog service.
///
/// Entries are immutable snapshots; the app only ever replaces the whole
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    /// Cover image URL. Empty when the service sent no image.
    pub cover_url: String,
    /// Year the show first aired.
    pub year: Option<i32>,
    pub score: Option<f64>,
    pub synopsis: Option<String>,
}

impl Entry {
    /// Build an entry with only the required fields set.
    pub fn new(id: EntryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover_url: String::new(),
            year: None,
            score: None,
            synopsis: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Failure reported by a non-HTTP backend (e.g. the mock).
    #[error("{0}")]
    Other(String),
}
