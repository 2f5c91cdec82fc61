//! Raw offer input
//!
//! What the form layer hands over before normalization. Every numeric field
//! is an untyped JSON value: absent, `null`, a number, a numeric string
//! (`"12,5"`), an empty string or garbage. Interpreting those values is the
//! job of the pricing normalizer, never of these types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::offer::{Accessory, Filling, LineItem, Offer, PricingMode};

/// Raw filling row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FillingInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub spec: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub discount_percent: Option<Value>,
}

/// Raw accessory row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryInput {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub qty: Option<Value>,
}

/// Raw line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<Value>,
    /// Older forms send `basePrice`
    #[serde(default, alias = "basePrice")]
    pub unit_price: Option<Value>,
    #[serde(default)]
    pub discount_percent: Option<Value>,
    #[serde(default)]
    pub vat_rate: Option<Value>,
    #[serde(default)]
    pub width_mm: Option<Value>,
    #[serde(default)]
    pub height_mm: Option<Value>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub opening: Option<String>,
    #[serde(default)]
    pub accessories: Vec<AccessoryInput>,
    #[serde(default)]
    pub fillings: Vec<FillingInput>,
}

/// Raw offer as submitted by the editor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OfferInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub global_discount_percent: Option<Value>,
    #[serde(default)]
    pub pricing_mode: Option<Value>,
    #[serde(default)]
    pub delivery_fee: Option<Value>,
    #[serde(default)]
    pub installation_fee: Option<Value>,
    #[serde(default)]
    pub fee_vat_rate: Option<Value>,
}

// ==================== From typed values ====================
//
// Stored offers (snapshots) go back through the normalizer, so a typed
// value can be turned into raw input again. Decimals travel as strings to
// keep every digit.

fn raw(value: Decimal) -> Option<Value> {
    Some(Value::String(value.to_string()))
}

impl From<&Filling> for FillingInput {
    fn from(filling: &Filling) -> Self {
        Self {
            id: Some(filling.id.clone()),
            spec: Some(filling.spec.clone()),
            dimensions: Some(filling.dimensions.clone()),
            price: raw(filling.price),
            discount_percent: raw(filling.discount_percent),
        }
    }
}

impl From<&Accessory> for AccessoryInput {
    fn from(accessory: &Accessory) -> Self {
        Self {
            code: Some(accessory.code.clone()),
            description: Some(accessory.description.clone()),
            qty: raw(accessory.qty),
        }
    }
}

impl From<&LineItem> for LineItemInput {
    fn from(item: &LineItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: Some(item.name.clone()),
            description: item.description.clone(),
            quantity: raw(item.quantity),
            unit_price: raw(item.unit_price),
            discount_percent: raw(item.discount_percent),
            vat_rate: raw(item.vat_rate),
            width_mm: item.width_mm.map(Value::from),
            height_mm: item.height_mm.map(Value::from),
            color: item.color.clone(),
            material: item.material.clone(),
            profile: item.profile.clone(),
            opening: item.opening.clone(),
            accessories: item.accessories.iter().map(AccessoryInput::from).collect(),
            fillings: item.fillings.iter().map(FillingInput::from).collect(),
        }
    }
}

impl From<&Offer> for OfferInput {
    fn from(offer: &Offer) -> Self {
        let mode = match offer.options.pricing_mode {
            PricingMode::Net => "NET",
            PricingMode::Gross => "GROSS",
        };
        Self {
            id: Some(offer.id.clone()),
            number: offer.number.clone(),
            customer: offer.customer.clone(),
            items: offer.items.iter().map(LineItemInput::from).collect(),
            global_discount_percent: raw(offer.options.global_discount_percent),
            pricing_mode: Some(Value::String(mode.to_string())),
            delivery_fee: raw(offer.options.delivery_fee),
            installation_fee: raw(offer.options.installation_fee),
            fee_vat_rate: raw(offer.options.fee_vat_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_loose_numeric_values() {
        let input: LineItemInput = serde_json::from_value(json!({
            "quantity": "2",
            "basePrice": "1.234,50",
            "discountPercent": null,
            "vatRate": 19
        }))
        .unwrap();
        assert_eq!(input.quantity, Some(json!("2")));
        assert_eq!(input.unit_price, Some(json!("1.234,50")));
        assert_eq!(input.discount_percent, None);
        assert_eq!(input.vat_rate, Some(json!(19)));
        assert!(input.id.is_none());
    }

    #[test]
    fn test_items_must_be_a_list() {
        let result = serde_json::from_value::<OfferInput>(json!({ "items": 5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_typed_offer_keeps_exact_values() {
        let offer = Offer::new("o-1").with_item(
            LineItem::new("a")
                .with_quantity(Decimal::new(-5, 0))
                .with_unit_price(Decimal::new(123456789, 4))
                .with_filling(Filling::new("f", Decimal::TEN)),
        );
        let input = OfferInput::from(&offer);
        assert_eq!(input.id.as_deref(), Some("o-1"));
        assert_eq!(input.pricing_mode, Some(json!("NET")));
        assert_eq!(input.items[0].quantity, Some(json!("-5")));
        assert_eq!(input.items[0].unit_price, Some(json!("12345.6789")));
        assert_eq!(input.items[0].fillings[0].price, Some(json!("10")));
        assert_eq!(input.items[0].width_mm, None);
    }

    #[test]
    fn test_empty_offer_input() {
        let input: OfferInput = serde_json::from_value(json!({})).unwrap();
        assert!(input.items.is_empty());
        assert!(input.pricing_mode.is_none());
    }
}
