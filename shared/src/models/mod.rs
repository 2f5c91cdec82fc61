//! Data models
//!
//! Shared between quote-server and the editor frontend (via API).
//! JSON field names are camelCase.

pub mod offer;
pub mod offer_input;
pub mod pricing;
pub mod product_template;
pub mod snapshot;

// Re-exports
pub use offer::*;
pub use offer_input::*;
pub use pricing::*;
pub use product_template::*;
pub use snapshot::*;
