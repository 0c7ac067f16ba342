//! Debounced, sequence-tagged title search.
//!
//! Every keystroke calls [`SearchDebouncer::schedule`], which bumps a shared
//! sequence number. [`SearchDebouncer::run`] waits out the quiet period and
//! only talks to the service if its query is still the latest; a response that
//! arrives after a newer query was scheduled is dropped as well.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cineradar_api::MetadataService;
use cineradar_core::models::{MediaType, Suggestion};
use cineradar_core::search::{is_searchable, SearchQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A newer query was scheduled before this one finished.
    Superseded,
    Results { seq: u64, items: Vec<Suggestion> },
    Failed { seq: u64 },
}

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    latest: Arc<AtomicU64>,
    quiet: Duration,
}

impl SearchDebouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            quiet,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Register a title change.
    ///
    /// Always invalidates whatever was pending. Returns the query to run, or
    /// `None` when the title is too short to look up.
    pub fn schedule(&self, text: &str, media_type: MediaType, min_len: usize) -> Option<SearchQuery> {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if !is_searchable(text, min_len) {
            return None;
        }
        Some(SearchQuery {
            seq,
            media_type,
            text: text.trim().to_string(),
        })
    }

    /// Invalidate any pending or in-flight query.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    /// Wait out the quiet period, then search if `query` is still the latest.
    pub async fn run<S: MetadataService>(&self, service: &S, query: SearchQuery) -> SearchOutcome {
        tokio::time::sleep(self.quiet).await;
        if !self.is_current(query.seq) {
            return SearchOutcome::Superseded;
        }

        tracing::debug!(seq = query.seq, text = %query.text, "searching titles");
        let result = service.search(query.media_type, &query.text).await;

        if !self.is_current(query.seq) {
            tracing::debug!(seq = query.seq, "dropping stale search response");
            return SearchOutcome::Superseded;
        }
        match result {
            Ok(items) => SearchOutcome::Results {
                seq: query.seq,
                items,
            },
            Err(e) => {
                tracing::warn!(error = %e, "title search failed");
                SearchOutcome::Failed { seq: query.seq }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeBackend;
    use cineradar_core::search::MIN_QUERY_LEN;

    const QUIET: Duration = Duration::from_millis(500);

    fn suggestion(id: u64, title: &str) -> Suggestion {
        Suggestion {
            id,
            title: title.into(),
            poster_path: None,
            release_date: None,
        }
    }

    fn backend() -> FakeBackend {
        FakeBackend {
            catalog: vec![
                (MediaType::Movie, suggestion(27205, "Inception")),
                (MediaType::Movie, suggestion(64956, "Inception: The Cobol Job")),
                (MediaType::Tv, suggestion(1399, "Game of Thrones")),
            ],
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_title_never_searches() {
        let backend = backend();
        let debouncer = SearchDebouncer::new(QUIET);

        for text in ["", "I", "In", "  In "] {
            assert!(debouncer.schedule(text, MediaType::Movie, MIN_QUERY_LEN).is_none());
        }
        tokio::time::sleep(QUIET * 2).await;
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_fires_once_for_final_title() {
        let backend = backend();
        let debouncer = SearchDebouncer::new(QUIET);

        let first = debouncer
            .schedule("Incep", MediaType::Movie, MIN_QUERY_LEN)
            .unwrap();
        let typing = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            let second = debouncer
                .schedule("Inception", MediaType::Movie, MIN_QUERY_LEN)
                .unwrap();
            debouncer.run(&backend, second).await
        };

        let (a, b) = tokio::join!(debouncer.run(&backend, first), typing);

        assert_eq!(a, SearchOutcome::Superseded);
        let SearchOutcome::Results { items, .. } = b else {
            panic!("expected results, got {b:?}");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(backend.calls(), vec!["search movie Inception"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_dropped() {
        let backend = FakeBackend {
            search_delay: Duration::from_secs(1),
            ..backend()
        };
        let debouncer = SearchDebouncer::new(QUIET);

        let first = debouncer
            .schedule("Game", MediaType::Tv, MIN_QUERY_LEN)
            .unwrap();
        let later = async {
            // First request is in flight by now.
            tokio::time::sleep(Duration::from_millis(800)).await;
            let second = debouncer
                .schedule("Inception", MediaType::Movie, MIN_QUERY_LEN)
                .unwrap();
            debouncer.run(&backend, second).await
        };

        let (a, b) = tokio::join!(debouncer.run(&backend, first), later);

        assert_eq!(a, SearchOutcome::Superseded);
        assert!(matches!(b, SearchOutcome::Results { .. }));
        assert_eq!(
            backend.calls(),
            vec!["search tv Game", "search movie Inception"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shortening_title_cancels_pending() {
        let backend = backend();
        let debouncer = SearchDebouncer::new(QUIET);

        let pending = debouncer
            .schedule("Inc", MediaType::Movie, MIN_QUERY_LEN)
            .unwrap();
        assert!(debouncer.schedule("In", MediaType::Movie, MIN_QUERY_LEN).is_none());

        assert_eq!(debouncer.run(&backend, pending).await, SearchOutcome::Superseded);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_reported_for_current_query() {
        let backend = backend();
        backend.fail_on("search", 401, "Invalid API key");
        let debouncer = SearchDebouncer::new(QUIET);

        let query = debouncer
            .schedule("Inception", MediaType::Movie, MIN_QUERY_LEN)
            .unwrap();
        let seq = query.seq;
        assert_eq!(
            debouncer.run(&backend, query).await,
            SearchOutcome::Failed { seq }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let backend = backend();
        let debouncer = SearchDebouncer::new(QUIET);
        let query = debouncer
            .schedule("Inception", MediaType::Movie, MIN_QUERY_LEN)
            .unwrap();
        debouncer.cancel();
        assert!(!debouncer.is_current(query.seq));
        assert_eq!(debouncer.run(&backend, query).await, SearchOutcome::Superseded);
    }
}
