//! Catalog backend trait and the error-collapsing fetch helpers.

pub mod jikan;
pub mod mock;
mod wire;

use std::future::Future;
use std::pin::Pin;

use crate::{CatalogError, Entry};

/// Result of a single catalog request.
pub type CatalogResult = Result<Vec<Entry>, CatalogError>;

/// A remote anime catalog that can list default entries and search by title.
///
/// Each call performs exactly one outbound request. Implementations must not
/// retry, dedupe or cancel; callers rely on every dispatched request producing
/// exactly one response.
pub trait CatalogBackend: Send + Sync {
    /// The canonical name of this catalog (e.g., "Jikan").
    fn name(&self) -> &str;

    /// Request the service's default entry listing.
    fn list_default<'a>(&'a self) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>>;

    /// Request entries whose title matches `text`, sorted ascending by title.
    ///
    /// `text` is forwarded as-is; an empty string keeps whatever meaning the
    /// service gives it.
    fn search_titles<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>>;
}

/// Fetch the default listing, collapsing any failure into an empty collection.
pub async fn fetch_default(backend: &dyn CatalogBackend) -> Vec<Entry> {
    match backend.list_default().await {
        Ok(entries) => {
            tracing::debug!(db = backend.name(), count = entries.len(), "default listing fetched");
            entries
        }
        Err(e) => {
            tracing::warn!(db = backend.name(), error = %e, "error fetching default listing");
            Vec::new()
        }
    }
}

/// Search by title, collapsing any failure into an empty collection.
pub async fn search(backend: &dyn CatalogBackend, text: &str) -> Vec<Entry> {
    match backend.search_titles(text).await {
        Ok(entries) => {
            tracing::debug!(db = backend.name(), query = text, count = entries.len(), "search fetched");
            entries
        }
        Err(e) => {
            tracing::warn!(db = backend.name(), query = text, error = %e, "error searching catalog");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::mock::{MockCatalog, MockResponse};
    use super::*;

    /// `io::Write` sink shared with the test so formatted events can be read back.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn search_passes_results_through() {
        let db = MockCatalog::new(MockResponse::Entries(vec![Entry::new(5, "Naruto")]));
        let entries = search(&db, "naruto").await;
        assert_eq!(entries, vec![Entry::new(5, "Naruto")]);
        assert_eq!(db.queries(), vec![Some("naruto".to_string())]);
    }

    #[tokio::test]
    async fn failure_collapses_to_empty() {
        let db = MockCatalog::new(MockResponse::Error("connection refused".into()));
        assert!(fetch_default(&db).await.is_empty());
        assert!(search(&db, "x").await.is_empty());
        assert_eq!(db.call_count(), 2);
    }

    #[tokio::test]
    async fn empty_query_is_forwarded_unchanged() {
        let db = MockCatalog::new(MockResponse::Entries(vec![]));
        search(&db, "").await;
        assert_eq!(db.queries(), vec![Some(String::new())]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failures_are_logged_as_warnings() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let db = MockCatalog::new(MockResponse::Error("connection refused".into()));
        fetch_default(&db).await;
        search(&db, "bebop").await;

        let logged = buf.contents();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("error fetching default listing"), "{logged}");
        assert!(logged.contains("error searching catalog"), "{logged}");
        assert!(logged.contains("bebop"), "{logged}");
        assert!(logged.contains("connection refused"), "{logged}");
    }
}
