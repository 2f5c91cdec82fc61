//! Item Price Calculator
//!
//! Line-level money for one offer position:
//! - Item discount on `quantity × unit_price`
//! - Fillings priced once per line (not per unit), with their own discount
//! - VAT at the line's rate, fillings included
//! - Global discount applied per line, after the item discount
//!
//! Everything stays at full `Decimal` precision; rounding happens when the
//! offer totals are converted for output.

use rust_decimal::prelude::*;
use shared::models::{Filling, LineItem, LineKind, OfferOptions, PricingMode};

use crate::offer_money::{percent_factor, percent_of};

/// Result of line-item calculation (unrounded)
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCalculation {
    pub id: String,
    pub kind: LineKind,
    /// VAT-exclusive, after item and filling discounts
    pub net: Decimal,
    pub gross: Decimal,
    /// `net` or `gross` per pricing mode
    pub amount: Decimal,
    pub after_global_discount: Decimal,
    /// Net after global discount; the VAT base
    pub net_after_global_discount: Decimal,
    /// VAT on `net_after_global_discount`
    pub vat: Decimal,
    pub vat_rate: Decimal,
    /// Money removed by the item and filling discounts
    pub item_discount: Decimal,
    pub fillings_net: Decimal,
}

// ==================== Line Formulas ====================

/// `price × (1 − discount/100)`
pub fn filling_net(filling: &Filling) -> Decimal {
    filling.price * percent_factor(filling.discount_percent)
}

/// `quantity × unit_price × (1 − discount/100) + Σ filling_net`
///
/// Fillings are not multiplied by quantity.
pub fn line_net(item: &LineItem) -> Decimal {
    let base = item.quantity * item.unit_price * percent_factor(item.discount_percent);
    base + item.fillings.iter().map(filling_net).sum::<Decimal>()
}

/// `line_net × (1 + vat_rate/100)`; fillings take the parent's rate
pub fn line_gross(item: &LineItem) -> Decimal {
    let net = line_net(item);
    net + percent_of(net, item.vat_rate)
}

/// Line amount in the requested representation
pub fn line_amount(item: &LineItem, mode: PricingMode) -> Decimal {
    match mode {
        PricingMode::Net => line_net(item),
        PricingMode::Gross => line_gross(item),
    }
}

/// `amount × (1 − global_discount/100)`
#[inline]
pub fn apply_global_discount(amount: Decimal, global_discount_percent: Decimal) -> Decimal {
    amount * percent_factor(global_discount_percent)
}

// ==================== Line Calculation ====================

fn calculate_line(
    item: &LineItem,
    kind: LineKind,
    mode: PricingMode,
    global_discount_percent: Decimal,
) -> ItemCalculation {
    let fillings_net: Decimal = item.fillings.iter().map(filling_net).sum();
    let net = line_net(item);
    let gross = line_gross(item);
    let amount = match mode {
        PricingMode::Net => net,
        PricingMode::Gross => gross,
    };

    let undiscounted = item.quantity * item.unit_price
        + item.fillings.iter().map(|f| f.price).sum::<Decimal>();

    let net_after_global_discount = apply_global_discount(net, global_discount_percent);

    ItemCalculation {
        id: item.id.clone(),
        kind,
        net,
        gross,
        amount,
        after_global_discount: apply_global_discount(amount, global_discount_percent),
        vat: percent_of(net_after_global_discount, item.vat_rate),
        net_after_global_discount,
        vat_rate: item.vat_rate,
        item_discount: undiscounted - net,
        fillings_net,
    }
}

/// Calculate one offer position under the offer's options
pub fn calculate_item(item: &LineItem, options: &OfferOptions) -> ItemCalculation {
    calculate_line(
        item,
        LineKind::Item,
        options.pricing_mode,
        options.global_discount_percent,
    )
}

/// Synthetic fee line (quantity 1, fee VAT rate), exempt from the global
/// discount. `None` unless the fee is positive.
pub fn calculate_fee(kind: LineKind, options: &OfferOptions) -> Option<ItemCalculation> {
    let (id, fee) = match kind {
        LineKind::DeliveryFee => ("delivery-fee", options.delivery_fee),
        LineKind::InstallationFee => ("installation-fee", options.installation_fee),
        LineKind::Item => return None,
    };
    if fee <= Decimal::ZERO {
        return None;
    }

    let line = LineItem::new(id)
        .with_quantity(Decimal::ONE)
        .with_unit_price(fee)
        .with_vat_rate(options.fee_vat_rate);
    Some(calculate_line(&line, kind, options.pricing_mode, Decimal::ZERO))
}
