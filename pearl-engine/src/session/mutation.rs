//! Optimistic mutation coordinator
//!
//! Every mutating screen uses the same write discipline:
//!
//! 1. Snapshot the cached collection.
//! 2. Apply the proposed update locally; the screen reflects it before
//!    the store round trip completes.
//! 3. Issue the store write.
//! 4. On success, the optimistic value is authoritative; emit a success
//!    notice.
//! 5. On failure, restore the snapshot verbatim and emit exactly one
//!    failure notice with a generic message.
//!
//! Rollback keys off the specific write's own outcome, never a later
//! write's. Mutations against the same entity are serialized through a
//! per-id lock, so a second mutation's snapshot is taken only after the
//! first has settled and a failed first write cannot erase the second's
//! pending effect.

use super::Keyed;
use super::cache::ScreenCache;
use super::notify::{GENERIC_WRITE_ERROR, Notifier};
use dashmap::DashMap;
use shared::AppResult;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// How an optimistic mutation settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The store accepted the write; the optimistic value stands
    Committed,
    /// The store rejected the write; the snapshot was restored
    RolledBack,
}

/// Coordinates optimistic writes for one screen's cache
pub struct MutationCoordinator<T> {
    cache: ScreenCache<T>,
    notifier: Notifier,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl<T> Clone for MutationCoordinator<T> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            notifier: self.notifier.clone(),
            locks: Arc::clone(&self.locks),
        }
    }
}

impl<T: Keyed + Clone + Send + Sync + 'static> MutationCoordinator<T> {
    pub fn new(cache: ScreenCache<T>, notifier: Notifier) -> Self {
        Self {
            cache,
            notifier,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Handle to the coordinated cache
    pub fn cache(&self) -> &ScreenCache<T> {
        &self.cache
    }

    /// Apply `apply` to the cached entity and issue `write` to the
    /// store.
    ///
    /// Returns a handle that resolves once the mutation has settled;
    /// screens that only care about the optimistic view may drop it.
    pub fn mutate<A, W>(
        &self,
        id: impl Into<String>,
        success_notice: impl Into<String>,
        apply: A,
        write: W,
    ) -> JoinHandle<MutationOutcome>
    where
        A: FnOnce(&mut T) + Send + 'static,
        W: Future<Output = AppResult<()>> + Send + 'static,
    {
        let id = id.into();
        let success_notice = success_notice.into();
        let cache = self.cache.clone();
        let notifier = self.notifier.clone();
        let locks = Arc::clone(&self.locks);

        tokio::spawn(async move {
            let lock = locks
                .entry(id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value()
                .clone();
            // Serializes same-entity mutations: the next snapshot is
            // taken only after this one settles.
            let _guard = lock.lock().await;

            let snapshot = cache.snapshot().await;
            if !cache.apply(&id, apply).await {
                tracing::warn!(entity = %id, "optimistic mutation target not in cache");
                notifier.error(GENERIC_WRITE_ERROR);
                return MutationOutcome::RolledBack;
            }

            match write.await {
                Ok(()) => {
                    notifier.success(success_notice);
                    MutationOutcome::Committed
                }
                Err(err) => {
                    tracing::error!(
                        entity = %id,
                        error = %err,
                        "store rejected optimistic write, rolling back"
                    );
                    cache.restore(snapshot).await;
                    notifier.error(GENERIC_WRITE_ERROR);
                    MutationOutcome::RolledBack
                }
            }
        })
    }
}
