//! Pearl Engine - order lifecycle and state synchronization core
//!
//! # Architecture
//!
//! The engine keeps a locally rendered view consistent with an embedded
//! document store that may reject a write after the view has already
//! changed. Reads flow store → session cache; writes are applied
//! optimistically and confirmed or rolled back against the store.
//!
//! # Module structure
//!
//! ```text
//! pearl-engine/src/
//! ├── core/          # Configuration, engine state wiring
//! ├── db/            # Embedded SurrealDB, entity models, repositories
//! ├── bus/           # Store change broadcast
//! ├── session/       # Screen caches, optimistic mutation coordinator, notices
//! ├── orders/        # Order service, live staff queue, dashboard aggregates
//! ├── reviews/       # Review gate
//! ├── leave/         # Leave requests
//! ├── catalog/       # Catalog administration
//! ├── recommend/     # Text-generation collaborator boundary
//! └── utils/         # Logging, validation
//! ```

pub mod bus;
pub mod catalog;
pub mod core;
pub mod db;
pub mod leave;
pub mod orders;
pub mod recommend;
pub mod reviews;
pub mod session;
pub mod utils;

// Re-export public types
pub use bus::{ChangeAction, ChangeBus, Collection, StoreEvent};
pub use catalog::CatalogService;
pub use self::core::{Config, EngineState};
pub use db::DbService;
pub use leave::LeaveService;
pub use orders::{DashboardStats, OrderQueue, OrderService};
pub use recommend::{RecommendationService, Recommendations};
pub use reviews::ReviewService;
pub use session::{MutationCoordinator, MutationOutcome, Notice, NoticeLevel, Notifier, ScreenCache};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
