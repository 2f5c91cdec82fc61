//! Input normalization
//!
//! Turns raw form input into well-typed domain values. Nothing here fails:
//! unreadable numbers become 0, out-of-range values are replaced, and each
//! correction is reported as a [`PricingWarning`] (and logged) so the editor
//! can point at the offending field.

use std::str::FromStr;

use rust_decimal::prelude::*;
use serde_json::Value;
use shared::models::{
    Accessory, AccessoryInput, Filling, FillingInput, LineItem, LineItemInput, Offer, OfferInput,
    OfferOptions, PricingMode, PricingWarning, WarningKind,
};

use crate::offer_money::{clamp_percent, to_f64_exact};

// ==================== Number Parsing ====================

/// Outcome of reading one raw numeric value
#[derive(Debug, Clone, PartialEq)]
pub enum RawNumber {
    /// Absent, `null` or blank
    Missing,
    Number(Decimal),
    /// Present but not a number; carries the raw text
    Garbage(String),
}

/// Read a raw JSON value as a number
///
/// Accepts JSON numbers and numeric strings in either notation
/// (`"1234.5"`, `"1.234,50"`, `"12,5"`), with surrounding whitespace and a
/// trailing `€` or `%`.
///
/// A comma always marks German notation. Without one, a single dot is the
/// decimal point (`"1.234"` reads as 1.234, not 1234) and two or more dots
/// are thousands separators (`"1.234.567"`).
pub fn read_number(value: Option<&Value>) -> RawNumber {
    match value {
        None | Some(Value::Null) => RawNumber::Missing,
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                RawNumber::Number(Decimal::from(i))
            } else {
                // beyond Decimal's range counts as unreadable
                n.as_f64()
                    .and_then(Decimal::from_f64)
                    .map_or_else(|| RawNumber::Garbage(n.to_string()), RawNumber::Number)
            }
        }
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(other) => RawNumber::Garbage(other.to_string()),
    }
}

fn parse_numeric_str(raw: &str) -> RawNumber {
    let trimmed = raw
        .trim()
        .trim_end_matches(['€', '%'])
        .trim();
    if trimmed.is_empty() {
        return RawNumber::Missing;
    }

    let canonical: String = if trimmed.contains(',') {
        // German notation, dots are thousands separators
        trimmed
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect()
    } else if trimmed.matches('.').count() > 1 {
        trimmed
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect()
    } else {
        trimmed.chars().filter(|c| !c.is_whitespace()).collect()
    };

    if let Ok(d) = Decimal::from_str(&canonical) {
        return RawNumber::Number(d);
    }
    canonical
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64)
        .map_or_else(|| RawNumber::Garbage(raw.to_string()), RawNumber::Number)
}

/// Parse-or-default: anything that is not a readable finite number is 0
pub fn parse_or_default(value: Option<&Value>) -> Decimal {
    match read_number(value) {
        RawNumber::Number(d) => d,
        RawNumber::Missing | RawNumber::Garbage(_) => Decimal::ZERO,
    }
}

// ==================== Field Rules ====================

/// Upper bound for quantities, prices and fees
///
/// Keeps every product and sum the engine forms far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Upper bound for VAT rates
pub const MAX_VAT_RATE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Where the value being normalized lives, for warning context
#[derive(Clone, Copy)]
struct Scope<'a> {
    item_id: Option<&'a str>,
    filling_id: Option<&'a str>,
}

impl<'a> Scope<'a> {
    fn offer() -> Self {
        Self {
            item_id: None,
            filling_id: None,
        }
    }

    fn item(item_id: &'a str) -> Self {
        Self {
            item_id: Some(item_id),
            filling_id: None,
        }
    }

    fn filling(item_id: &'a str, filling_id: &'a str) -> Self {
        Self {
            item_id: Some(item_id),
            filling_id: Some(filling_id),
        }
    }
}

struct Warnings(Vec<PricingWarning>);

impl Warnings {
    fn push(
        &mut self,
        scope: Scope<'_>,
        kind: WarningKind,
        field: &str,
        original: String,
        applied: Decimal,
    ) {
        tracing::warn!(
            item_id = scope.item_id.unwrap_or("-"),
            filling_id = scope.filling_id.unwrap_or("-"),
            field,
            original = %original,
            applied = %applied,
            kind = ?kind,
            "Offer input corrected"
        );
        self.0.push(PricingWarning {
            kind,
            item_id: scope.item_id.map(str::to_string),
            filling_id: scope.filling_id.map(str::to_string),
            field: field.to_string(),
            original,
            applied: to_f64_exact(applied),
        });
    }

    /// Any number, garbage reported and replaced by 0
    fn number(&mut self, scope: Scope<'_>, field: &str, value: Option<&Value>) -> Decimal {
        match read_number(value) {
            RawNumber::Number(d) => d,
            RawNumber::Missing => Decimal::ZERO,
            RawNumber::Garbage(raw) => {
                self.push(scope, WarningKind::Unparseable, field, raw, Decimal::ZERO);
                Decimal::ZERO
            }
        }
    }

    /// Negative becomes 0, above `max` becomes `max`
    fn bounded(
        &mut self,
        scope: Scope<'_>,
        field: &str,
        value: Option<&Value>,
        max: Decimal,
    ) -> Decimal {
        let n = self.number(scope, field, value);
        if n.is_sign_negative() && !n.is_zero() {
            self.push(scope, WarningKind::Negative, field, n.to_string(), Decimal::ZERO);
            return Decimal::ZERO;
        }
        if n > max {
            self.push(scope, WarningKind::OutOfRange, field, n.to_string(), max);
            return max;
        }
        n
    }

    /// Quantities, prices, fees
    fn amount(&mut self, scope: Scope<'_>, field: &str, value: Option<&Value>) -> Decimal {
        self.bounded(scope, field, value, MAX_AMOUNT)
    }

    /// Discounts: clamped into [0, 100]
    fn percent(&mut self, scope: Scope<'_>, field: &str, value: Option<&Value>) -> Decimal {
        let n = self.number(scope, field, value);
        let clamped = clamp_percent(n);
        if clamped != n {
            self.push(scope, WarningKind::OutOfRange, field, n.to_string(), clamped);
        }
        clamped
    }

    /// VAT: negative becomes 0, above 100 is kept but flagged
    fn vat_rate(&mut self, scope: Scope<'_>, field: &str, value: Option<&Value>) -> Decimal {
        let n = self.bounded(scope, field, value, MAX_VAT_RATE);
        if n > Decimal::ONE_HUNDRED {
            self.push(scope, WarningKind::UnusualVatRate, field, n.to_string(), n);
        }
        n
    }

    fn pricing_mode(&mut self, value: Option<&Value>) -> PricingMode {
        match value {
            None | Some(Value::Null) => PricingMode::default(),
            Some(Value::String(s)) if s.trim().is_empty() => PricingMode::default(),
            Some(Value::String(s)) => PricingMode::parse(s).unwrap_or_else(|| {
                self.push(
                    Scope::offer(),
                    WarningKind::UnknownPricingMode,
                    "pricingMode",
                    s.clone(),
                    Decimal::ZERO,
                );
                PricingMode::default()
            }),
            Some(other) => {
                self.push(
                    Scope::offer(),
                    WarningKind::UnknownPricingMode,
                    "pricingMode",
                    other.to_string(),
                    Decimal::ZERO,
                );
                PricingMode::default()
            }
        }
    }
}

/// Non-blank id, or one derived from the position so repeated runs over
/// the same input agree
fn id_or(id: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => fallback(),
    }
}

/// Positive whole millimetres; descriptive only, so no warnings
fn dimension(value: Option<&Value>) -> Option<u32> {
    parse_or_default(value)
        .round()
        .to_u32()
        .filter(|mm| *mm > 0)
}

fn text(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ==================== Normalization ====================

fn normalize_filling(
    item_id: &str,
    index: usize,
    input: &FillingInput,
    warnings: &mut Warnings,
) -> Filling {
    let id = id_or(input.id.as_deref(), || format!("{item_id}-filling-{}", index + 1));
    let scope = Scope::filling(item_id, &id);
    let price = warnings.amount(scope, "price", input.price.as_ref());
    let discount_percent = warnings.percent(scope, "discountPercent", input.discount_percent.as_ref());

    Filling {
        spec: input.spec.clone().unwrap_or_default(),
        dimensions: input.dimensions.clone().unwrap_or_default(),
        price,
        discount_percent,
        id,
    }
}

fn normalize_accessory(input: &AccessoryInput) -> Accessory {
    Accessory {
        code: input.code.clone().unwrap_or_default(),
        description: input.description.clone().unwrap_or_default(),
        qty: parse_or_default(input.qty.as_ref()).clamp(Decimal::ZERO, MAX_AMOUNT),
    }
}

fn normalize_item_into(index: usize, input: &LineItemInput, warnings: &mut Warnings) -> LineItem {
    let id = id_or(input.id.as_deref(), || format!("item-{}", index + 1));
    let scope = Scope::item(&id);

    let quantity = warnings.amount(scope, "quantity", input.quantity.as_ref());
    let unit_price = warnings.amount(scope, "unitPrice", input.unit_price.as_ref());
    let discount_percent = warnings.percent(scope, "discountPercent", input.discount_percent.as_ref());
    let vat_rate = warnings.vat_rate(scope, "vatRate", input.vat_rate.as_ref());

    let fillings = input
        .fillings
        .iter()
        .enumerate()
        .map(|(i, f)| normalize_filling(&id, i, f, warnings))
        .collect();
    let accessories = input.accessories.iter().map(normalize_accessory).collect();

    LineItem {
        name: input.name.clone().unwrap_or_default(),
        description: text(input.description.as_ref()),
        quantity,
        unit_price,
        discount_percent,
        vat_rate,
        width_mm: dimension(input.width_mm.as_ref()),
        height_mm: dimension(input.height_mm.as_ref()),
        color: text(input.color.as_ref()),
        material: text(input.material.as_ref()),
        profile: text(input.profile.as_ref()),
        opening: text(input.opening.as_ref()),
        accessories,
        fillings,
        id,
    }
}

/// Normalize a single raw line item at `index` (0-based) in its offer
pub fn normalize_item(index: usize, input: &LineItemInput) -> (LineItem, Vec<PricingWarning>) {
    let mut warnings = Warnings(Vec::new());
    let item = normalize_item_into(index, input, &mut warnings);
    (item, warnings.0)
}

/// Normalize a raw offer: every item plus the offer-level options
pub fn normalize_offer(input: &OfferInput) -> (Offer, Vec<PricingWarning>) {
    let mut warnings = Warnings(Vec::new());

    let items = input
        .items
        .iter()
        .enumerate()
        .map(|(index, i)| normalize_item_into(index, i, &mut warnings))
        .collect();

    let scope = Scope::offer();
    let options = OfferOptions {
        global_discount_percent: warnings.percent(
            scope,
            "globalDiscountPercent",
            input.global_discount_percent.as_ref(),
        ),
        pricing_mode: warnings.pricing_mode(input.pricing_mode.as_ref()),
        delivery_fee: warnings.amount(scope, "deliveryFee", input.delivery_fee.as_ref()),
        installation_fee: warnings.amount(
            scope,
            "installationFee",
            input.installation_fee.as_ref(),
        ),
        fee_vat_rate: warnings.vat_rate(scope, "feeVatRate", input.fee_vat_rate.as_ref()),
    };

    let offer = Offer {
        id: id_or(input.id.as_deref(), String::new),
        number: text(input.number.as_ref()),
        customer: text(input.customer.as_ref()),
        items,
        options,
    };
    (offer, warnings.0)
}

/// Re-apply the input rules to an already typed offer (e.g. a stored
/// snapshot that never went through [`normalize_offer`])
pub fn renormalize_offer(offer: &Offer) -> (Offer, Vec<PricingWarning>) {
    normalize_offer(&OfferInput::from(offer))
}
