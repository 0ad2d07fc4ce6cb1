use crate::{SiteError, SiteRepository};
use blog_models::SiteConfig;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cached site document as seen by presentational components
#[derive(Debug, Clone, Default)]
pub struct SiteState {
    pub site: Option<Arc<SiteConfig>>,
    pub loading: bool,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Holds the last fetched site document. Populated independently of page
/// metadata, which always queries the repository directly.
#[derive(Default)]
pub struct SiteStore {
    state: RwLock<SiteState>,
    in_flight: AtomicUsize,
}

impl SiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> SiteState {
        self.state.read().await.clone()
    }

    /// Re-reads the document. On failure the previously cached document is kept.
    /// `loading` stays set until every overlapping refresh has finished.
    pub async fn refresh(
        &self,
        repository: &dyn SiteRepository,
    ) -> Result<Option<Arc<SiteConfig>>, SiteError> {
        {
            let mut state = self.state.write().await;
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
        }

        let result = repository.find_one().await;

        let mut state = self.state.write().await;
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        state.loading = remaining > 0;

        match result {
            Ok(site) => {
                state.site = site.map(Arc::new);
                state.refreshed_at = Some(Utc::now());
                Ok(state.site.clone())
            }
            Err(e) => {
                tracing::warn!("Failed to refresh site document: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySiteRepository;

    struct FailingRepository;

    #[async_trait::async_trait]
    impl SiteRepository for FailingRepository {
        async fn find_one(&self) -> Result<Option<SiteConfig>, SiteError> {
            Err(SiteError::IoError(std::io::Error::other("database offline")))
        }
    }

    #[tokio::test]
    async fn test_refresh_populates_state() {
        let store = SiteStore::new();
        let repo = MemorySiteRepository::new(Some(SiteConfig {
            title: Some("Notes".to_string()),
            ..Default::default()
        }));

        let initial = store.snapshot().await;
        assert!(initial.site.is_none());
        assert!(initial.refreshed_at.is_none());

        let site = store.refresh(&repo).await.unwrap();
        assert_eq!(site.unwrap().title(), Some("Notes"));

        let state = store.snapshot().await;
        assert!(!state.loading);
        assert!(state.refreshed_at.is_some());
        assert_eq!(state.site.unwrap().title(), Some("Notes"));
    }

    /// Blocks `find_one` until the gate is opened
    struct GatedRepository {
        gate: Arc<tokio::sync::Notify>,
    }

    #[async_trait::async_trait]
    impl SiteRepository for GatedRepository {
        async fn find_one(&self) -> Result<Option<SiteConfig>, SiteError> {
            self.gate.notified().await;
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_overlapping_refreshes_keep_loading() {
        let store = Arc::new(SiteStore::new());
        let gate = Arc::new(tokio::sync::Notify::new());

        let slow = {
            let store = Arc::clone(&store);
            let repo = GatedRepository { gate: Arc::clone(&gate) };
            tokio::spawn(async move { store.refresh(&repo).await })
        };
        while !store.snapshot().await.loading {
            tokio::task::yield_now().await;
        }

        let fast = MemorySiteRepository::new(Some(SiteConfig::default()));
        store.refresh(&fast).await.unwrap();
        assert!(store.snapshot().await.loading);

        gate.notify_one();
        slow.await.unwrap().unwrap();
        assert!(!store.snapshot().await.loading);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_site() {
        let store = SiteStore::new();
        store
            .refresh(&MemorySiteRepository::new(Some(SiteConfig::default())))
            .await
            .unwrap();

        assert!(store.refresh(&FailingRepository).await.is_err());

        let state = store.snapshot().await;
        assert!(!state.loading);
        assert!(state.site.is_some());
    }
}
