//! Engine state wiring

use crate::bus::ChangeBus;
use crate::catalog::CatalogService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    CatalogItemRepository, LeaveRequestRepository, OrderRepository, ReviewRepository,
};
use crate::leave::LeaveService;
use crate::orders::OrderService;
use crate::recommend::{HttpRecommendationClient, RecommendationService};
use crate::reviews::ReviewService;
use crate::session::Notifier;
use shared::AppResult;
use std::sync::Arc;

/// Shared engine state: store handle, buses, and services
#[derive(Clone)]
pub struct EngineState {
    pub config: Config,
    pub db: DbService,
    pub change_bus: ChangeBus,
    pub notifier: Notifier,
    pub catalog: CatalogService,
    pub orders: OrderService,
    pub reviews: ReviewService,
    pub leave: LeaveService,
    pub recommendations: RecommendationService,
}

impl EngineState {
    /// Open the persistent store and wire up all services
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::open(&config.work_dir).await?;
        Self::wire(config.clone(), db)
    }

    /// In-memory store variant (tests and throwaway runs)
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db = DbService::open_memory().await?;
        Self::wire(config.clone(), db)
    }

    fn wire(config: Config, db: DbService) -> AppResult<Self> {
        let change_bus = ChangeBus::new();
        let notifier = Notifier::new();

        let order_repo = OrderRepository::new(db.db.clone(), change_bus.clone());
        let review_repo = ReviewRepository::new(db.db.clone(), change_bus.clone());
        let leave_repo = LeaveRequestRepository::new(db.db.clone(), change_bus.clone());
        let catalog_repo = CatalogItemRepository::new(db.db.clone(), change_bus.clone());

        let recommender = HttpRecommendationClient::new(
            config.recommender_url.clone(),
            config.recommender_timeout_ms,
        )?;

        Ok(Self {
            catalog: CatalogService::new(catalog_repo),
            orders: OrderService::new(order_repo.clone()),
            reviews: ReviewService::new(review_repo, order_repo),
            leave: LeaveService::new(leave_repo),
            recommendations: RecommendationService::new(Arc::new(recommender)),
            config,
            db,
            change_bus,
            notifier,
        })
    }

    /// Fresh order repository handle (live queue subscriptions)
    pub fn order_repository(&self) -> OrderRepository {
        self.orders.repository().clone()
    }
}
