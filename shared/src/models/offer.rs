//! Offer Model
//!
//! An offer is the aggregate being quoted: an ordered list of line items
//! plus the offer-level fee/discount parameters. Totals are never stored on
//! these types; they are derived by the pricing engine.
//!
//! Numeric fields hold already-normalized `Decimal` values (finite, in
//! range). Raw form input lives in [`super::offer_input`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price representation used when summing line amounts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    /// Amounts are VAT-exclusive; VAT is computed and added on top
    #[default]
    Net,
    /// Amounts are VAT-inclusive; VAT is not added again
    Gross,
}

impl PricingMode {
    /// Parse a mode name leniently ("net", "GROSS", " Brutto ")
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NET" | "NETTO" => Some(Self::Net),
            "GROSS" | "BRUTTO" => Some(Self::Gross),
            _ => None,
        }
    }
}

/// Accessory attached to a line item (handle, sill, ...)
///
/// Informational only; never part of any total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub qty: Decimal,
}

/// Filling (glazing or infill panel), priced once per line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filling {
    pub id: String,
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub dimensions: String,
    /// Not multiplied by the item quantity
    pub price: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
}

impl Filling {
    pub fn new(id: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            price,
            ..Default::default()
        }
    }

    pub fn with_spec(self, spec: impl Into<String>) -> Self {
        Self {
            spec: spec.into(),
            ..self
        }
    }

    pub fn with_dimensions(self, dimensions: impl Into<String>) -> Self {
        Self {
            dimensions: dimensions.into(),
            ..self
        }
    }

    pub fn with_discount_percent(self, discount_percent: Decimal) -> Self {
        Self {
            discount_percent,
            ..self
        }
    }
}

/// One priced position in an offer (e.g. one window configuration)
///
/// Value type: every `with_*` method consumes the item and returns the
/// updated copy, so an edit never touches a value another surface holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable across edits
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: Decimal,
    /// Net unit price before discount
    pub unit_price: Decimal,
    /// Per-item discount (0-100)
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Percent, e.g. 19 = 19%
    #[serde(default)]
    pub vat_rate: Decimal,

    // Descriptive attributes, opaque to pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,

    #[serde(default)]
    pub accessories: Vec<Accessory>,
    #[serde(default)]
    pub fillings: Vec<Filling>,
}

impl LineItem {
    /// Blank line item: zero quantity, zero price, no discount, no VAT
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_quantity(self, quantity: Decimal) -> Self {
        Self { quantity, ..self }
    }

    pub fn with_unit_price(self, unit_price: Decimal) -> Self {
        Self { unit_price, ..self }
    }

    pub fn with_discount_percent(self, discount_percent: Decimal) -> Self {
        Self {
            discount_percent,
            ..self
        }
    }

    pub fn with_vat_rate(self, vat_rate: Decimal) -> Self {
        Self { vat_rate, ..self }
    }

    pub fn with_dimensions(self, width_mm: u32, height_mm: u32) -> Self {
        Self {
            width_mm: Some(width_mm),
            height_mm: Some(height_mm),
            ..self
        }
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..self
        }
    }

    pub fn with_filling(mut self, filling: Filling) -> Self {
        self.fillings.push(filling);
        self
    }

    pub fn without_filling(mut self, filling_id: &str) -> Self {
        self.fillings.retain(|f| f.id != filling_id);
        self
    }

    pub fn with_accessory(mut self, accessory: Accessory) -> Self {
        self.accessories.push(accessory);
        self
    }

    /// "1230 × 1480 mm, RAL 9016, PVC" style description of the attributes
    pub fn attribute_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let (Some(w), Some(h)) = (self.width_mm, self.height_mm) {
            parts.push(format!("{w} × {h} mm"));
        }
        for attr in [&self.color, &self.material, &self.profile, &self.opening]
            .into_iter()
            .flatten()
        {
            if !attr.trim().is_empty() {
                parts.push(attr.trim().to_string());
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Offer-level pricing parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OfferOptions {
    /// Applied per line after the item discount (0-100)
    #[serde(default)]
    pub global_discount_percent: Decimal,
    #[serde(default)]
    pub pricing_mode: PricingMode,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub installation_fee: Decimal,
    /// VAT rate of the synthetic fee lines
    #[serde(default)]
    pub fee_vat_rate: Decimal,
}

/// The aggregate being quoted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    /// Human-facing offer number (e.g. "AN-2024-0042")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Display/print order; not significant to totals
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub options: OfferOptions,
}

impl Offer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_options(self, options: OfferOptions) -> Self {
        Self { options, ..self }
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the item `id`; unknown ids leave the offer unchanged
    pub fn with_item_replaced(mut self, id: &str, item: LineItem) -> Self {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == id) {
            *slot = item;
        }
        self
    }

    pub fn without_item(mut self, id: &str) -> Self {
        self.items.retain(|i| i.id != id);
        self
    }

    pub fn without_index(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.items.remove(index);
        }
        self
    }

    pub fn item(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }
}
