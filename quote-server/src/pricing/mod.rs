//! Offer Pricing Engine
//!
//! Single source of truth for offer money. Every surface (editor summary,
//! PDF export, persisted snapshot) asks this module for totals instead of
//! re-deriving them.
//!
//! Flow: raw input → [`normalize`] → [`item_calculator`] per line →
//! [`offer_calculator`] aggregate.

pub mod item_calculator;
pub mod normalize;
pub mod offer_calculator;

pub use item_calculator::*;
pub use normalize::{
    MAX_AMOUNT, MAX_VAT_RATE, RawNumber, normalize_item, normalize_offer, parse_or_default,
    read_number, renormalize_offer,
};
pub use offer_calculator::*;

use shared::models::{Offer, OfferInput, OfferTotals};

/// Normalized offer together with its totals
#[derive(Debug, Clone)]
pub struct PricedOffer {
    pub offer: Offer,
    pub totals: OfferTotals,
}

/// Normalize raw input and compute totals, carrying the input warnings
pub fn price_input(input: &OfferInput) -> PricedOffer {
    let (offer, warnings) = normalize_offer(input);
    let mut totals = compute_offer(&offer);
    totals.warnings = warnings;
    PricedOffer { offer, totals }
}

/// Same as [`price_input`] for an offer that is already typed but may not
/// have been normalized (stored snapshots)
pub fn price_offer(offer: &Offer) -> PricedOffer {
    let (offer, warnings) = renormalize_offer(offer);
    let mut totals = compute_offer(&offer);
    totals.warnings = warnings;
    PricedOffer { offer, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_input_carries_warnings() {
        let input: OfferInput = serde_json::from_value(json!({
            "items": [
                { "id": "a", "quantity": "2", "unitPrice": "100", "vatRate": "19" },
                { "id": "b", "quantity": -1, "unitPrice": 500 }
            ],
            "globalDiscountPercent": 250
        }))
        .unwrap();
        let priced = price_input(&input);

        assert_eq!(priced.offer.items.len(), 2);
        assert_eq!(priced.totals.warnings.len(), 2);
        // 100% global discount after clamping
        assert_eq!(priced.totals.grand_total, 0.0);
        assert_eq!(priced.totals.sub_total, 200.0);
    }

    #[test]
    fn test_price_input_huge_values_stay_finite() {
        let input: OfferInput = serde_json::from_value(json!({
            "items": [
                { "quantity": "79228162514264337593543950335", "unitPrice": 2 },
                { "quantity": 1e20, "unitPrice": 1e20, "vatRate": 1e20 }
            ],
            "deliveryFee": "99999999999999999999999"
        }))
        .unwrap();
        let priced = price_input(&input);

        // capped: 2e9 + 1e18 × (1 + 1000%) + 1e9 fee
        let grand = priced.totals.grand_total;
        let expected = 11_000_000_003_000_000_000.0;
        assert!(((grand - expected) / expected).abs() < 1e-12);
        assert_eq!(priced.totals.warnings.len(), 6);
    }

    #[test]
    fn test_price_input_without_ids_is_repeatable() {
        let input: OfferInput = serde_json::from_value(json!({
            "items": [
                { "quantity": 1, "unitPrice": "10", "discountPercent": 120 },
                { "quantity": 2, "unitPrice": 5, "fillings": [{ "price": 3 }] }
            ]
        }))
        .unwrap();
        let first = serde_json::to_string(&price_input(&input).totals).unwrap();
        let second = serde_json::to_string(&price_input(&input).totals).unwrap();
        assert_eq!(first, second);

        let totals = price_input(&input).totals;
        assert_eq!(totals.per_item[0].id, "item-1");
        assert_eq!(totals.per_item[1].id, "item-2");
        assert_eq!(totals.warnings[0].item_id.as_deref(), Some("item-1"));
    }

    #[test]
    fn test_price_offer_normalizes_typed_values() {
        use rust_decimal::Decimal;
        use shared::models::{LineItem, OfferOptions};

        let offer = Offer::new("o-1")
            .with_options(OfferOptions {
                global_discount_percent: Decimal::from(300),
                ..Default::default()
            })
            .with_item(
                LineItem::new("a")
                    .with_quantity(Decimal::from(-5))
                    .with_unit_price(Decimal::from(150))
                    .with_discount_percent(Decimal::from(250)),
            )
            .with_item(
                LineItem::new("b")
                    .with_quantity(Decimal::ONE)
                    .with_unit_price(Decimal::from(750)),
            );
        let priced = price_offer(&offer);

        assert_eq!(priced.totals.sub_total, 750.0);
        // global discount clamped to 100
        assert_eq!(priced.totals.grand_total, 0.0);
        assert_eq!(priced.totals.warnings.len(), 3);
    }

    #[test]
    fn test_price_input_string_numbers() {
        let input: OfferInput = serde_json::from_value(json!({
            "items": [{ "quantity": "2", "basePrice": "100,00", "vatRate": "19" }]
        }))
        .unwrap();
        let priced = price_input(&input);
        assert!(priced.totals.warnings.is_empty());
        assert_eq!(priced.totals.grand_total, 238.0);
    }
}
