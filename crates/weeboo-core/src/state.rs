//! Search/selection state: the result collection, the selected entry and the
//! query text.
//!
//! Every dispatched request is tagged with a [`Ticket`] carrying a strictly
//! increasing sequence number. Responses may arrive in any order; a response
//! is applied only when its sequence number is higher than the last one
//! applied, so the most recently *dispatched* request always wins.

use crate::catalog::{self, CatalogBackend};
use crate::{Entry, EntryId};

/// A dispatched catalog request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub seq: u64,
    /// `None` for the default listing, `Some(text)` for a title search.
    pub query: Option<String>,
}

impl Ticket {
    /// Run this request against `backend`. Failures come back empty.
    pub async fn fetch(&self, backend: &dyn CatalogBackend) -> Vec<Entry> {
        match &self.query {
            None => catalog::fetch_default(backend).await,
            Some(text) => catalog::search(backend, text).await,
        }
    }
}

#[derive(Debug, Default)]
pub struct CatalogState {
    results: Vec<Entry>,
    /// Held by id, so it may point at an entry that is no longer present.
    selected: Option<EntryId>,
    query: String,
    /// Sequence number of the last dispatched request.
    last_dispatched: u64,
    /// Sequence number of the last applied response (0 = nothing applied).
    last_applied: u64,
    in_flight: usize,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[Entry] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    /// The selected entry, if the selection still resolves in the collection.
    pub fn selected(&self) -> Option<&Entry> {
        let id = self.selected?;
        self.results.iter().find(|e| e.id == id)
    }

    /// Number of dispatched requests whose responses have not arrived yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Replace the collection and select its first entry (or nothing).
    pub fn set_results(&mut self, results: Vec<Entry>) {
        self.selected = results.first().map(|e| e.id);
        self.results = results;
    }

    /// Select the entry with `id`. An unknown id clears the selection.
    ///
    /// Returns whether the id was found.
    pub fn select(&mut self, id: EntryId) -> bool {
        let found = self.results.iter().any(|e| e.id == id);
        self.selected = if found { Some(id) } else { None };
        found
    }

    /// Dispatch the startup listing.
    pub fn begin_default_fetch(&mut self) -> Ticket {
        self.dispatch(None)
    }

    /// Update the query text and dispatch a search for it.
    ///
    /// The text is forwarded unchanged, including the empty string.
    pub fn set_query(&mut self, text: impl Into<String>) -> Ticket {
        self.query = text.into();
        let query = self.query.clone();
        self.dispatch(Some(query))
    }

    fn dispatch(&mut self, query: Option<String>) -> Ticket {
        self.last_dispatched += 1;
        self.in_flight += 1;
        tracing::debug!(seq = self.last_dispatched, query = ?query, "dispatching catalog request");
        Ticket {
            seq: self.last_dispatched,
            query,
        }
    }

    /// Give up on a ticket whose request was never sent, so it no longer
    /// counts as in flight.
    pub fn abandon(&mut self, ticket: &Ticket) {
        self.in_flight = self.in_flight.saturating_sub(1);
        tracing::debug!(seq = ticket.seq, in_flight = self.in_flight, "abandoned catalog request");
    }

    /// Apply the response for request `seq`.
    ///
    /// Returns `false` (and leaves state untouched) when a newer request has
    /// already been applied.
    pub fn apply(&mut self, seq: u64, results: Vec<Entry>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if seq <= self.last_applied {
            tracing::debug!(
                seq,
                last_applied = self.last_applied,
                "discarding stale catalog response"
            );
            return false;
        }
        self.last_applied = seq;
        tracing::info!(seq, count = results.len(), "applied catalog response");
        self.set_results(results);
        true
    }
}
