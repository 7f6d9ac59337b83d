//! Acting role
//!
//! The platform does not authenticate; the role is a client-chosen label
//! that the services use to scope which operations an actor may invoke.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-chosen role of the acting session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Staff,
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Customer => "Customer",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        };
        write!(f, "{label}")
    }
}
