//! Live staff order queue
//!
//! The one live-updating subscription of the platform: Pending and
//! InProgress orders, oldest first. Each store change to the orders
//! collection delivers a full refreshed snapshot into the screen cache.

use crate::bus::{ChangeBus, Collection};
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::session::ScreenCache;
use shared::AppResult;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Live view of the staff preparation queue
///
/// Dropping the handle (or calling [`OrderQueue::shutdown`]) cancels
/// the refresh worker; in-flight store effects still land.
pub struct OrderQueue {
    cache: ScreenCache<Order>,
    shutdown: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl OrderQueue {
    /// Subscribe to the queue; performs the initial fetch before
    /// returning.
    pub async fn subscribe(repo: OrderRepository, bus: &ChangeBus) -> Self {
        let cache: ScreenCache<Order> = ScreenCache::new();
        let shutdown = CancellationToken::new();
        let mut rx = bus.subscribe();

        // Initial snapshot. On failure the cache stays in its error
        // state and the next order change refreshes it.
        let _ = Self::refresh(&cache, &repo).await;

        let worker = tokio::spawn({
            let cache = cache.clone();
            let token = shutdown.clone();
            async move {
                loop {
                    tokio::select! {
                        _ = token.cancelled() => break,
                        result = rx.recv() => match result {
                            Ok(event) if event.collection == Collection::Orders => {
                                let _ = Self::refresh(&cache, &repo).await;
                            }
                            Ok(_) => {}
                            Err(RecvError::Lagged(n)) => {
                                tracing::warn!("order queue lagged {n} events, refreshing");
                                let _ = Self::refresh(&cache, &repo).await;
                            }
                            Err(RecvError::Closed) => break,
                        }
                    }
                }
                tracing::debug!("order queue worker stopped");
            }
        });

        Self {
            cache,
            shutdown,
            worker: Some(worker),
        }
    }

    async fn refresh(cache: &ScreenCache<Order>, repo: &OrderRepository) -> AppResult<()> {
        cache
            .refetch(|| async { Ok(repo.find_queue().await?) })
            .await
    }

    /// Handle to the queue's screen cache
    pub fn cache(&self) -> ScreenCache<Order> {
        self.cache.clone()
    }

    /// Stop the refresh worker and wait for it to finish
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl Drop for OrderQueue {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
