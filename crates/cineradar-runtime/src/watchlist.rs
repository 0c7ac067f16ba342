use std::sync::Arc;

use tokio::sync::RwLock;

use cineradar_api::{ApiError, WatchlistService};
use cineradar_core::editor::EditorMode;
use cineradar_core::models::{MediaDraft, MediaEntry, MediaId};

use crate::RuntimeError;

/// Local copy of the remote watchlist.
///
/// The cache is only ever replaced wholesale by [`WatchlistStore::fetch_all`];
/// mutations go to the backend and are followed by a full reload.
pub struct WatchlistStore<S> {
    service: Arc<S>,
    entries: Arc<RwLock<Vec<MediaEntry>>>,
}

impl<S> Clone for WatchlistStore<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<S: WatchlistService> WatchlistStore<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn entries(&self) -> Vec<MediaEntry> {
        self.entries.read().await.clone()
    }

    pub async fn get(&self, id: MediaId) -> Option<MediaEntry> {
        self.entries.read().await.iter().find(|e| e.id == id).cloned()
    }

    /// Replace the cache with the backend's collection.
    pub async fn fetch_all(&self) -> Result<Vec<MediaEntry>, ApiError> {
        let fresh = self.service.list().await?;
        tracing::debug!(count = fresh.len(), "watchlist reloaded");
        *self.entries.write().await = fresh.clone();
        Ok(fresh)
    }

    pub async fn create(&self, draft: MediaDraft) -> Result<Vec<MediaEntry>, RuntimeError> {
        self.service.create(&draft).await?;
        tracing::info!(title = %draft.title, "entry created");
        self.reload().await
    }

    pub async fn update(
        &self,
        id: MediaId,
        draft: MediaDraft,
    ) -> Result<Vec<MediaEntry>, RuntimeError> {
        self.service.update(id, &draft).await?;
        tracing::info!(id, title = %draft.title, "entry updated");
        self.reload().await
    }

    pub async fn delete(&self, id: MediaId) -> Result<Vec<MediaEntry>, RuntimeError> {
        self.service.delete(id).await?;
        tracing::info!(id, "entry deleted");
        self.reload().await
    }

    /// Send an editor draft to the endpoint its mode calls for.
    pub async fn submit(
        &self,
        mode: EditorMode,
        draft: MediaDraft,
    ) -> Result<Vec<MediaEntry>, RuntimeError> {
        match mode {
            EditorMode::Create => self.create(draft).await,
            EditorMode::Update(id) => self.update(id, draft).await,
        }
    }

    async fn reload(&self) -> Result<Vec<MediaEntry>, RuntimeError> {
        self.fetch_all().await.map_err(|e| {
            tracing::warn!(error = %e, "reload after mutation failed");
            RuntimeError::Reload(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{entry, FakeBackend};
    use cineradar_core::filter::{filter_by_type, TypeFilter};
    use cineradar_core::models::{MediaType, WatchStatus};

    fn store(backend: FakeBackend) -> (WatchlistStore<FakeBackend>, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        (WatchlistStore::new(Arc::clone(&backend)), backend)
    }

    fn seeded() -> FakeBackend {
        FakeBackend::with_entries(vec![
            entry(1, "Heat", MediaType::Movie),
            entry(2, "Dark", MediaType::Tv),
        ])
    }

    fn draft(title: &str) -> MediaDraft {
        MediaDraft {
            title: title.into(),
            media_type: MediaType::Movie,
            status: WatchStatus::PlanToWatch,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_cache() {
        let (store, backend) = store(seeded());
        assert!(store.entries().await.is_empty());

        store.fetch_all().await.unwrap();
        assert_eq!(store.entries().await.len(), 2);

        backend.entries.lock().unwrap().truncate(1);
        let fresh = store.fetch_all().await.unwrap();
        assert_eq!(fresh.len(), 1);
        assert_eq!(store.entries().await, fresh);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_cache() {
        let (store, backend) = store(seeded());
        store.fetch_all().await.unwrap();
        backend.fail_on("list", 500, "");
        assert!(store.fetch_all().await.is_err());
        assert_eq!(store.entries().await.len(), 2);
    }

    #[tokio::test]
    async fn test_create_mode_issues_create_then_reload() {
        let (store, backend) = store(seeded());
        store.fetch_all().await.unwrap();

        let reloaded = store.submit(EditorMode::Create, draft("Ronin")).await.unwrap();

        assert_eq!(backend.calls(), vec!["list", "create Ronin", "list"]);
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded[2].id, 3);
        assert_eq!(reloaded[2].status, WatchStatus::PlanToWatch);
        assert_eq!(store.entries().await, reloaded);
    }

    #[tokio::test]
    async fn test_update_mode_addresses_entry() {
        let (store, backend) = store(seeded());

        let reloaded = store
            .submit(EditorMode::Update(2), draft("Dark (2017)"))
            .await
            .unwrap();

        assert_eq!(backend.calls(), vec!["update 2", "list"]);
        let updated = reloaded.iter().find(|e| e.id == 2).unwrap();
        assert_eq!(updated.title, "Dark (2017)");
        assert_eq!(updated.media_type, MediaType::Movie);
    }

    #[tokio::test]
    async fn test_delete_then_reload() {
        let (store, backend) = store(seeded());
        store.fetch_all().await.unwrap();

        let reloaded = store.delete(1).await.unwrap();
        assert_eq!(backend.calls(), vec!["list", "delete 1", "list"]);
        assert_eq!(reloaded.len(), 1);
        assert!(store.get(1).await.is_none());
        assert!(store.get(2).await.is_some());
    }

    #[tokio::test]
    async fn test_failed_create_surfaces_message_and_skips_reload() {
        let backend = seeded();
        backend.fail_on("create", 400, "You must include a title, type, and status");
        let (store, backend) = store(backend);
        store.fetch_all().await.unwrap();

        let err = store.create(draft("")).await.unwrap_err();
        assert!(!err.was_applied());
        assert_eq!(
            err.user_message("Failed to save media"),
            "You must include a title, type, and status"
        );
        assert_eq!(backend.calls(), vec!["list", "create"]);
        assert_eq!(store.entries().await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_missing_entry() {
        let (store, _) = store(seeded());
        let err = store.update(99, draft("Ghost")).await.unwrap_err();
        assert_eq!(err.user_message("Failed to save media"), "Media not found");
    }

    #[tokio::test]
    async fn test_reload_failure_after_mutation() {
        let backend = seeded();
        backend.fail_on("list", 503, "");
        let (store, backend) = store(backend);

        let err = store.delete(1).await.unwrap_err();
        assert!(err.was_applied());
        assert_eq!(backend.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_filtered_view_of_cache() {
        let (store, _) = store(seeded());
        store.fetch_all().await.unwrap();
        let entries = store.entries().await;

        let tv = filter_by_type(&entries, TypeFilter::Tv);
        assert_eq!(tv.len(), 1);
        assert_eq!(tv[0].title, "Dark");
        assert_eq!(filter_by_type(&entries, TypeFilter::All).len(), 2);
    }
}
