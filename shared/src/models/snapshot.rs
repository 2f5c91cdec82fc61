//! Offer Snapshot Model
//!
//! A persisted offer carries its grand total as a cache. The line items stay
//! authoritative; reconciliation recomputes and compares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::offer::Offer;
use super::pricing::OfferTotals;

/// Offer as persisted, with cached grand total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferSnapshot {
    pub offer: Offer,
    pub grand_total: f64,
    pub saved_at: DateTime<Utc>,
}

/// Result of recomputing a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    pub cached_grand_total: f64,
    pub recomputed_grand_total: f64,
    /// Cached total differs from the recomputed one by more than a cent
    pub is_stale: bool,
    pub totals: OfferTotals,
}
