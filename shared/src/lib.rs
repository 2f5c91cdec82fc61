//! Shared types for the quote service
//!
//! Domain models (offer, line item, catalog template, pricing results) and
//! the unified error system, used by the server and by API clients.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
