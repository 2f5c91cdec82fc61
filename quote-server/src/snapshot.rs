//! Persisted offer snapshots
//!
//! A snapshot stores the offer together with its grand total as a cache.
//! On load the line items are authoritative: [`reconcile`] runs them through
//! the normalizer again (a stored snapshot is untrusted input), recomputes
//! and reports whether the cached figure went stale.

use chrono::{DateTime, Utc};
use shared::models::{Offer, OfferSnapshot, Reconciliation};

use crate::offer_money::money_eq;
use crate::pricing::price_offer;

/// Freeze an offer with its current grand total
pub fn snapshot(offer: &Offer, now: DateTime<Utc>) -> OfferSnapshot {
    let priced = price_offer(offer);
    OfferSnapshot {
        offer: priced.offer,
        grand_total: priced.totals.grand_total,
        saved_at: now,
    }
}

/// Recompute a stored snapshot and compare against its cached total
pub fn reconcile(snapshot: &OfferSnapshot) -> Reconciliation {
    let totals = price_offer(&snapshot.offer).totals;
    if !totals.warnings.is_empty() {
        tracing::warn!(
            offer_id = %snapshot.offer.id,
            warnings = totals.warnings.len(),
            "Stored offer needed corrections"
        );
    }
    let is_stale = !money_eq(snapshot.grand_total, totals.grand_total);

    if is_stale {
        tracing::info!(
            offer_id = %snapshot.offer.id,
            cached = snapshot.grand_total,
            recomputed = totals.grand_total,
            saved_at = %snapshot.saved_at,
            "Cached offer total is stale"
        );
    }

    Reconciliation {
        cached_grand_total: snapshot.grand_total,
        recomputed_grand_total: totals.grand_total,
        is_stale,
        totals,
    }
}
