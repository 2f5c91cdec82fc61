//! Product Template Model
//!
//! Catalog entries the offer editor seeds new line items from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::offer::{Accessory, Filling, LineItem};

/// Catalog product template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductTemplate {
    pub id: String,
    pub name: String,
    /// Category reference (String ID)
    #[serde(default)]
    pub category: String,
    /// Net unit price
    pub base_price: Decimal,
    /// Tax rate in percentage (e.g., 19 = 19%)
    #[serde(default)]
    pub vat_rate: Decimal,
    #[serde(default)]
    pub default_fillings: Vec<Filling>,
    #[serde(default)]
    pub default_accessories: Vec<Accessory>,
    /// None = shared catalog, Some(user) = per-user template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl ProductTemplate {
    pub fn is_shared(&self) -> bool {
        self.owner.is_none()
    }
}

impl LineItem {
    /// Seed a line item (quantity 1, no discount) from a catalog template
    pub fn from_template(template: &ProductTemplate, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: template.name.clone(),
            quantity: Decimal::ONE,
            unit_price: template.base_price,
            vat_rate: template.vat_rate,
            fillings: template.default_fillings.clone(),
            accessories: template.default_accessories.clone(),
            ..Default::default()
        }
    }
}
