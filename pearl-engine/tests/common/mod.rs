//! Shared fixtures for integration tests

use pearl_engine::bus::ChangeBus;
use pearl_engine::db::DbService;
use pearl_engine::db::models::CatalogItemCreate;
use pearl_engine::db::repository::{
    CatalogItemRepository, LeaveRequestRepository, OrderRepository, ReviewRepository,
};
use shared::models::Category;

pub struct TestStore {
    pub db: DbService,
    pub bus: ChangeBus,
    pub orders: OrderRepository,
    pub reviews: ReviewRepository,
    pub leave: LeaveRequestRepository,
    pub catalog: CatalogItemRepository,
}

/// Fresh in-memory store with repositories wired to one change bus
pub async fn store() -> TestStore {
    let db = DbService::open_memory().await.expect("open in-memory store");
    let bus = ChangeBus::new();
    TestStore {
        orders: OrderRepository::new(db.db.clone(), bus.clone()),
        reviews: ReviewRepository::new(db.db.clone(), bus.clone()),
        leave: LeaveRequestRepository::new(db.db.clone(), bus.clone()),
        catalog: CatalogItemRepository::new(db.db.clone(), bus.clone()),
        db,
        bus,
    }
}

pub fn grilled_salmon() -> CatalogItemCreate {
    CatalogItemCreate {
        name: "Grilled Salmon".to_string(),
        description: "Atlantic salmon with lemon butter".to_string(),
        price: 24.50,
        image: None,
        category: Category::MainCourse,
        tags: Some(vec!["seafood".to_string(), "grilled".to_string()]),
    }
}

pub fn priced_item(name: &str, price: f64) -> CatalogItemCreate {
    CatalogItemCreate {
        name: name.to_string(),
        description: format!("{name} from the test menu"),
        price,
        image: None,
        category: Category::MainCourse,
        tags: None,
    }
}
