//! Leave request management
//!
//! Staff submit requests (always Pending); admins approve or deny.
//! Decided requests are terminal: a second decision is rejected.

use crate::db::models::LeaveRequest;
use crate::db::repository::LeaveRequestRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MIN_REASON_LEN, validate_required_text,
};
use chrono::NaiveDate;
use shared::models::{LeaveDecision, LeaveStatus, Role};
use shared::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct LeaveService {
    repo: LeaveRequestRepository,
}

impl LeaveService {
    pub fn new(repo: LeaveRequestRepository) -> Self {
        Self { repo }
    }

    /// Staff submission; every new request starts Pending
    pub async fn submit(
        &self,
        staff_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
    ) -> AppResult<LeaveRequest> {
        validate_required_text(staff_name, "staff name", MAX_NAME_LEN)?;
        validate_required_text(reason, "reason", MAX_NOTE_LEN)?;
        if reason.trim().len() < MIN_REASON_LEN {
            return Err(AppError::validation(format!(
                "reason must be at least {MIN_REASON_LEN} characters"
            ))
            .with_detail("field", "reason"));
        }
        if end_date < start_date {
            return Err(AppError::with_message(
                ErrorCode::InvalidDateRange,
                "End date must not precede start date",
            ));
        }

        let request = LeaveRequest {
            id: None,
            staff_name: staff_name.trim().to_string(),
            start_date,
            end_date,
            reason: reason.trim().to_string(),
            status: LeaveStatus::Pending,
        };
        Ok(self.repo.create(request).await?)
    }

    /// Admin decision on a pending request
    ///
    /// Approved and Denied are terminal; deciding an already-decided
    /// request fails with a state violation.
    pub async fn decide(
        &self,
        role: Role,
        request_id: &str,
        decision: LeaveDecision,
    ) -> AppResult<LeaveRequest> {
        if !role.is_admin() {
            return Err(AppError::permission_denied(
                "Only admins can decide leave requests",
            ));
        }

        let current = self.repo.find_by_id(request_id).await?.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::LeaveRequestNotFound,
                format!("Leave request {request_id} not found"),
            )
        })?;

        if current.status.is_terminal() {
            return Err(AppError::with_message(
                ErrorCode::LeaveAlreadyDecided,
                format!("Request is already {}", current.status),
            )
            .with_detail("status", current.status.as_str()));
        }

        Ok(self.repo.set_status(request_id, decision.status()).await?)
    }

    /// All requests, latest start date first (admin view)
    pub async fn all(&self) -> AppResult<Vec<LeaveRequest>> {
        Ok(self.repo.find_all().await?)
    }

    /// One staff member's requests, latest start date first
    pub async fn for_staff(&self, staff_name: &str) -> AppResult<Vec<LeaveRequest>> {
        Ok(self.repo.find_by_staff(staff_name).await?)
    }
}
