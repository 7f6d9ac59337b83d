//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the thousands digit of the code:
/// - 0xxx: General errors
/// - 2xxx: Role / permission errors
/// - 4xxx: Order errors
/// - 5xxx: Payment errors
/// - 6xxx: Catalog errors
/// - 7xxx: Review errors
/// - 8xxx: Leave errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Role / permission errors (2xxx)
    Role,
    /// Order errors (4xxx)
    Order,
    /// Payment errors (5xxx)
    Payment,
    /// Catalog errors (6xxx)
    Catalog,
    /// Review errors (7xxx)
    Review,
    /// Leave errors (8xxx)
    Leave,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from a numeric code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            2000..3000 => Self::Role,
            4000..5000 => Self::Order,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Catalog,
            7000..8000 => Self::Review,
            8000..9000 => Self::Leave,
            _ => Self::System,
        }
    }

    /// String name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Role => "role",
            Self::Order => "order",
            Self::Payment => "payment",
            Self::Catalog => "catalog",
            Self::Review => "review",
            Self::Leave => "leave",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
