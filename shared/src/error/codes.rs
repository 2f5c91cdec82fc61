//! Unified error codes for the quote service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Offer errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the browser client can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,

    // ==================== 4xxx: Offer ====================
    /// Stored offer snapshot is malformed
    SnapshotInvalid = 4010,

    // ==================== 6xxx: Catalog ====================
    /// Product template has invalid price
    ProductInvalidPrice = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Document rendering failed
    PrintFailed = 9202,
    /// Font files for PDF rendering are missing
    FontNotFound = 9203,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::SnapshotInvalid => "Offer snapshot is invalid",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::PrintFailed => "Document rendering failed",
            ErrorCode::FontNotFound => "PDF fonts not found",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            0 => Ok(ErrorCode::Success),
            4010 => Ok(ErrorCode::SnapshotInvalid),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            9001 => Ok(ErrorCode::InternalError),
            9202 => Ok(ErrorCode::PrintFailed),
            9203 => Ok(ErrorCode::FontNotFound),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
