//! Shared types for the Pearl ordering platform
//!
//! Domain enums, status state machines, the unified error system, and
//! small utilities used by every crate in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Category, LeaveDecision, LeaveStatus, OrderStatus, PaymentStatus, Role};
pub use serde::{Deserialize, Serialize};
