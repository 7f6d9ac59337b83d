//! Screen-scoped collection cache
//!
//! A screen holds one handle for its mount duration and passes clones
//! to whatever needs its view of the collection. The cache is refreshed
//! explicitly via [`ScreenCache::refetch`]; there is no ambient global
//! state and no automatic retry.

use super::Keyed;
use shared::AppResult;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// User-facing message when a read fails
pub const READ_ERROR_NOTICE: &str = "Failed to load data. Please retry.";

/// View state of a cached collection
#[derive(Debug, Clone, PartialEq)]
pub enum CacheState<T> {
    /// Before the first fetch completes
    Loading,
    /// Last fetched (or optimistically mutated) snapshot
    Ready(Vec<T>),
    /// A read failed; holds the user-facing message. Retry via refetch.
    Error(String),
}

impl<T> CacheState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, CacheState::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CacheState::Error(_))
    }
}

/// Shared handle to one screen's collection snapshot
#[derive(Debug)]
pub struct ScreenCache<T> {
    inner: Arc<RwLock<CacheState<T>>>,
}

impl<T> Clone for ScreenCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ScreenCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScreenCache<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheState::Loading)),
        }
    }
}

impl<T: Clone> ScreenCache<T> {
    /// Current view state
    pub async fn state(&self) -> CacheState<T> {
        self.inner.read().await.clone()
    }

    /// Cached items; empty while loading or in error
    pub async fn items(&self) -> Vec<T> {
        match &*self.inner.read().await {
            CacheState::Ready(items) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// Replace the snapshot outright
    pub async fn set(&self, items: Vec<T>) {
        *self.inner.write().await = CacheState::Ready(items);
    }

    /// Reload the snapshot from the store
    ///
    /// On failure the cache moves to [`CacheState::Error`] with a
    /// user-facing message; the raw error is logged and returned so the
    /// caller can offer a retry.
    pub async fn refetch<F, Fut>(&self, loader: F) -> AppResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Vec<T>>>,
    {
        match loader().await {
            Ok(items) => {
                *self.inner.write().await = CacheState::Ready(items);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "collection fetch failed");
                *self.inner.write().await = CacheState::Error(READ_ERROR_NOTICE.to_string());
                Err(err)
            }
        }
    }

    /// Full-state snapshot for rollback
    pub(crate) async fn snapshot(&self) -> CacheState<T> {
        self.inner.read().await.clone()
    }

    /// Restore a snapshot verbatim
    pub(crate) async fn restore(&self, snapshot: CacheState<T>) {
        *self.inner.write().await = snapshot;
    }
}

impl<T: Keyed + Clone> ScreenCache<T> {
    /// Cached entity by its store id
    pub async fn get(&self, key: &str) -> Option<T> {
        match &*self.inner.read().await {
            CacheState::Ready(items) => items
                .iter()
                .find(|item| item.key().as_deref() == Some(key))
                .cloned(),
            _ => None,
        }
    }

    /// Mutate the cached entity in place; false if it is not present
    pub(crate) async fn apply<F>(&self, key: &str, f: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.inner.write().await;
        if let CacheState::Ready(items) = &mut *guard {
            if let Some(item) = items
                .iter_mut()
                .find(|item| item.key().as_deref() == Some(key))
            {
                f(item);
                return true;
            }
        }
        false
    }
}
