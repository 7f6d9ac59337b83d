//! Unified error codes for the Pearl platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Role / permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 7xxx: Review errors
//! - 8xxx: Leave errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 2xxx: Role ====================
    /// The acting role is not permitted to perform this operation
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Operation conflicts with the order's current status
    OrderStateViolation = 4002,

    // ==================== 5xxx: Payment ====================
    /// Payment status change not allowed for this actor
    PaymentNotAllowed = 5001,

    // ==================== 6xxx: Catalog ====================
    /// Catalog item not found
    CatalogItemNotFound = 6001,
    /// Price is negative or not a finite number
    InvalidPrice = 6002,

    // ==================== 7xxx: Review ====================
    /// Order is not eligible for a review
    ReviewNotAllowed = 7001,
    /// Order has already been reviewed
    OrderAlreadyReviewed = 7002,
    /// Rating outside the 1..=5 range
    InvalidRating = 7003,

    // ==================== 8xxx: Leave ====================
    /// Leave request not found
    LeaveRequestNotFound = 8001,
    /// Leave request was already approved or denied
    LeaveAlreadyDecided = 8002,
    /// End date precedes start date
    InvalidDateRange = 8003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Entity store unreachable
    StoreUnavailable = 9003,
    /// Recommendation collaborator failed
    RecommendationUnavailable = 9004,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::PermissionDenied => "Operation not permitted for this role",
            Self::OrderNotFound => "Order not found",
            Self::OrderStateViolation => "Operation not allowed in the order's current status",
            Self::PaymentNotAllowed => "Payment status change not allowed",
            Self::CatalogItemNotFound => "Catalog item not found",
            Self::InvalidPrice => "Price must be a non-negative number",
            Self::ReviewNotAllowed => "Order is not eligible for a review",
            Self::OrderAlreadyReviewed => "Order has already been reviewed",
            Self::InvalidRating => "Rating must be between 1 and 5",
            Self::LeaveRequestNotFound => "Leave request not found",
            Self::LeaveAlreadyDecided => "Leave request has already been decided",
            Self::InvalidDateRange => "End date must not precede start date",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database error",
            Self::StoreUnavailable => "Entity store unreachable",
            Self::RecommendationUnavailable => "Recommendation service failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unrecognized u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::RequiredField),
            7 => Ok(Self::ValueOutOfRange),
            2001 => Ok(Self::PermissionDenied),
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::OrderStateViolation),
            5001 => Ok(Self::PaymentNotAllowed),
            6001 => Ok(Self::CatalogItemNotFound),
            6002 => Ok(Self::InvalidPrice),
            7001 => Ok(Self::ReviewNotAllowed),
            7002 => Ok(Self::OrderAlreadyReviewed),
            7003 => Ok(Self::InvalidRating),
            8001 => Ok(Self::LeaveRequestNotFound),
            8002 => Ok(Self::LeaveAlreadyDecided),
            8003 => Ok(Self::InvalidDateRange),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::StoreUnavailable),
            9004 => Ok(Self::RecommendationUnavailable),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip_through_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderStateViolation,
            ErrorCode::PaymentNotAllowed,
            ErrorCode::InvalidRating,
            ErrorCode::LeaveAlreadyDecided,
            ErrorCode::RecommendationUnavailable,
        ];
        for code in codes {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }

    #[test]
    fn serde_uses_numeric_representation() {
        let json = serde_json::to_string(&ErrorCode::InvalidRating).unwrap();
        assert_eq!(json, "7003");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::InvalidRating);
    }
}
