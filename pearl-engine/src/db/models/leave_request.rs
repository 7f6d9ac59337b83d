//! Leave Request Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::LeaveStatus;
use surrealdb::RecordId;

/// Leave request ID type
pub type LeaveRequestId = RecordId;

/// Leave request entity
///
/// Created by staff in `Pending`; only an admin decision moves it to a
/// terminal status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<LeaveRequestId>,
    pub staff_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Full "table:id" string of this request, if persisted
    pub fn key(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_string())
    }
}

/// Partial-field leave request update, applied as a store merge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeavePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

impl LeavePatch {
    pub fn with_status(status: LeaveStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}
