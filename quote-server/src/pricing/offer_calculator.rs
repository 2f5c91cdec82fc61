//! Offer Calculator
//!
//! Aggregates line calculations into offer totals:
//! 1. Every item line (item discount, then global discount)
//! 2. Delivery/installation fee lines (no global discount)
//! 3. Sums, VAT per rate, grand total
//!
//! `compute` is a pure function of its input: same items and options,
//! same totals.

use std::collections::BTreeMap;

use rust_decimal::prelude::*;
use shared::models::{
    ItemTotals, LineItem, LineKind, Offer, OfferOptions, OfferTotals, PricingMode,
    VatBreakdownEntry,
};

use super::item_calculator::{ItemCalculation, calculate_fee, calculate_item};
use crate::offer_money::{to_f64, to_f64_exact};

/// Running sums over all lines (unrounded)
#[derive(Debug, Default)]
struct Accumulator {
    sub_total: Decimal,
    after_global_discount: Decimal,
    item_discount: Decimal,
    net: Decimal,
    vat: Decimal,
    /// rate -> (base, vat)
    by_rate: BTreeMap<Decimal, (Decimal, Decimal)>,
}

impl Accumulator {
    fn add(&mut self, line: &ItemCalculation) {
        self.sub_total += line.amount;
        self.after_global_discount += line.after_global_discount;
        self.item_discount += line.item_discount;
        self.net += line.net_after_global_discount;
        self.vat += line.vat;

        // normalize so 19 and 19.00 share one entry
        let entry = self.by_rate.entry(line.vat_rate.normalize()).or_default();
        entry.0 += line.net_after_global_discount;
        entry.1 += line.vat;
    }
}

fn to_item_totals(line: &ItemCalculation) -> ItemTotals {
    ItemTotals {
        id: line.id.clone(),
        kind: line.kind,
        net: to_f64(line.net),
        gross: to_f64(line.gross),
        amount: to_f64(line.amount),
        after_global_discount: to_f64(line.after_global_discount),
        vat: to_f64(line.vat),
        vat_rate: to_f64_exact(line.vat_rate),
        item_discount: to_f64(line.item_discount),
        fillings_net: to_f64(line.fillings_net),
    }
}

/// All line calculations in output order: items, then fees
pub fn calculate_lines(items: &[LineItem], options: &OfferOptions) -> Vec<ItemCalculation> {
    let mut lines: Vec<ItemCalculation> = items
        .iter()
        .map(|item| calculate_item(item, options))
        .collect();
    lines.extend(
        [LineKind::DeliveryFee, LineKind::InstallationFee]
            .into_iter()
            .filter_map(|kind| calculate_fee(kind, options)),
    );
    lines
}

/// Compute offer totals from normalized line items
///
/// Inputs are expected within the normalizer's bounds ([`super::MAX_AMOUNT`],
/// [`super::MAX_VAT_RATE`]), which keep every sum far from `Decimal`
/// overflow. Warnings are left empty; callers that normalized raw input
/// attach them.
pub fn compute(items: &[LineItem], options: &OfferOptions) -> OfferTotals {
    let lines = calculate_lines(items, options);

    let mut acc = Accumulator::default();
    for line in &lines {
        acc.add(line);
    }

    // VAT is added on top in NET mode, already inside the amounts in GROSS
    let vat_total = match options.pricing_mode {
        PricingMode::Net => acc.vat,
        PricingMode::Gross => Decimal::ZERO,
    };
    let grand_total = acc.after_global_discount + vat_total;

    let totals = OfferTotals {
        pricing_mode: options.pricing_mode,
        per_item: lines.iter().map(to_item_totals).collect(),
        sub_total: to_f64(acc.sub_total),
        discount_amount: to_f64(acc.sub_total - acc.after_global_discount),
        item_discount_total: to_f64(acc.item_discount),
        net_total: to_f64(acc.net),
        vat_total: to_f64(vat_total),
        vat_contained: to_f64(acc.vat),
        vat_breakdown: acc
            .by_rate
            .iter()
            .map(|(rate, (base, vat))| VatBreakdownEntry {
                rate: to_f64_exact(*rate),
                base: to_f64(*base),
                amount: to_f64(*vat),
            })
            .collect(),
        grand_total: to_f64(grand_total),
        warnings: Vec::new(),
    };

    tracing::debug!(
        items = items.len(),
        lines = totals.per_item.len(),
        mode = ?options.pricing_mode,
        grand_total = totals.grand_total,
        "Offer totals computed"
    );
    totals
}

/// Compute totals for an offer
pub fn compute_offer(offer: &Offer) -> OfferTotals {
    compute(&offer.items, &offer.options)
}
