//! Leave request state machine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a staff leave request
///
/// `Pending → {Approved, Denied}`; both outcomes are terminal, there is
/// no re-opening path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Denied,
}

impl LeaveStatus {
    /// A decided request cannot change again
    pub fn is_terminal(self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }

    /// Serialized representation, matching the store encoding
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Denied => "DENIED",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Denied => "Denied",
        };
        write!(f, "{label}")
    }
}

/// An admin's verdict on a pending leave request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveDecision {
    Approve,
    Deny,
}

impl LeaveDecision {
    /// The terminal status this decision produces
    pub fn status(self) -> LeaveStatus {
        match self {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Deny => LeaveStatus::Denied,
        }
    }
}
