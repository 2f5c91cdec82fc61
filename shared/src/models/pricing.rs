//! Pricing Results
//!
//! Output of the pricing engine. Monetary values are `f64` rounded to
//! 2 decimal places at the engine boundary; every surface (summary table,
//! PDF, snapshot) reads the same values.

use serde::{Deserialize, Serialize};

use super::offer::PricingMode;

/// Origin of a priced line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Item,
    DeliveryFee,
    InstallationFee,
}

impl LineKind {
    pub fn is_fee(&self) -> bool {
        !matches!(self, LineKind::Item)
    }
}

/// Per-line result, in input order, fee lines last
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemTotals {
    pub id: String,
    pub kind: LineKind,
    /// VAT-exclusive, after item and filling discounts
    pub net: f64,
    pub gross: f64,
    /// `net` or `gross` depending on the pricing mode
    pub amount: f64,
    pub after_global_discount: f64,
    /// VAT on the globally discounted net
    pub vat: f64,
    pub vat_rate: f64,
    /// Money removed by item + filling discounts (net)
    pub item_discount: f64,
    /// Net share of the fillings
    pub fillings_net: f64,
}

/// VAT per distinct rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdownEntry {
    pub rate: f64,
    /// Discounted net base taxed at `rate`
    pub base: f64,
    pub amount: f64,
}

/// What a normalization warning is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningKind {
    /// Non-numeric text coerced to 0
    Unparseable,
    /// Negative quantity/price/fee/rate replaced by 0
    Negative,
    /// Percentage clamped into [0, 100], or an amount/rate capped at its
    /// maximum
    OutOfRange,
    /// VAT above 100% accepted as-is
    UnusualVatRate,
    /// Unknown pricing mode, NET used
    UnknownPricingMode,
}

/// Non-fatal input issue detected while normalizing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingWarning {
    pub kind: WarningKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filling_id: Option<String>,
    /// camelCase field name as submitted
    pub field: String,
    /// Raw value as text
    pub original: String,
    pub applied: f64,
}

/// Offer-level aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferTotals {
    pub pricing_mode: PricingMode,
    pub per_item: Vec<ItemTotals>,
    /// Σ amount, before global discount
    pub sub_total: f64,
    /// Money removed by the global discount
    pub discount_amount: f64,
    pub item_discount_total: f64,
    /// Grand total excluding VAT
    pub net_total: f64,
    /// VAT added on top; 0 in GROSS mode
    pub vat_total: f64,
    /// VAT share inside the grand total (both modes)
    pub vat_contained: f64,
    /// Ascending by rate
    pub vat_breakdown: Vec<VatBreakdownEntry>,
    pub grand_total: f64,
    #[serde(default)]
    pub warnings: Vec<PricingWarning>,
}

impl OfferTotals {
    pub fn item_lines(&self) -> impl Iterator<Item = &ItemTotals> {
        self.per_item.iter().filter(|l| !l.kind.is_fee())
    }

    pub fn fee_lines(&self) -> impl Iterator<Item = &ItemTotals> {
        self.per_item.iter().filter(|l| l.kind.is_fee())
    }

    pub fn line(&self, id: &str) -> Option<&ItemTotals> {
        self.per_item.iter().find(|l| l.id == id)
    }
}
