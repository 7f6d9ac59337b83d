//! Leave Request Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::bus::{ChangeAction, ChangeBus, Collection};
use crate::db::models::{LeavePatch, LeaveRequest};
use shared::models::LeaveStatus;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const LEAVE_TABLE: &str = "leave_request";

#[derive(Clone)]
pub struct LeaveRequestRepository {
    base: BaseRepository,
}

impl LeaveRequestRepository {
    pub fn new(db: Surreal<Db>, bus: ChangeBus) -> Self {
        Self {
            base: BaseRepository::new(db, bus),
        }
    }

    /// All leave requests, latest start date first
    pub async fn find_all(&self) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request ORDER BY start_date DESC")
            .await?
            .take(0)?;
        Ok(requests)
    }

    /// One staff member's requests, latest start date first
    pub async fn find_by_staff(&self, staff_name: &str) -> RepoResult<Vec<LeaveRequest>> {
        let requests: Vec<LeaveRequest> = self
            .base
            .db()
            .query("SELECT * FROM leave_request WHERE staff_name = $name ORDER BY start_date DESC")
            .bind(("name", staff_name.to_string()))
            .await?
            .take(0)?;
        Ok(requests)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<LeaveRequest>> {
        let record_id = parse_id(LEAVE_TABLE, id)?;
        let request: Option<LeaveRequest> = self.base.db().select(record_id).await?;
        Ok(request)
    }

    /// Create a new request; the store assigns the id
    pub async fn create(&self, request: LeaveRequest) -> RepoResult<LeaveRequest> {
        let created: Option<LeaveRequest> =
            self.base.db().create(LEAVE_TABLE).content(request).await?;
        let created = created
            .ok_or_else(|| RepoError::Database("Failed to create leave request".to_string()))?;

        if let Some(key) = created.key() {
            self.base
                .publish(Collection::LeaveRequests, ChangeAction::Created, &key);
        }
        Ok(created)
    }

    /// Persist a decision on a request
    pub async fn set_status(&self, id: &str, status: LeaveStatus) -> RepoResult<LeaveRequest> {
        let record_id = parse_id(LEAVE_TABLE, id)?;
        let updated: Option<LeaveRequest> = self
            .base
            .db()
            .update(record_id)
            .merge(LeavePatch::with_status(status))
            .await?;
        let updated =
            updated.ok_or_else(|| RepoError::NotFound(format!("Leave request {id} not found")))?;

        self.base
            .publish(Collection::LeaveRequests, ChangeAction::Updated, id);
        Ok(updated)
    }
}
