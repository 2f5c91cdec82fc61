//! Quote document model
//!
//! Renderer-neutral layout of an offer: header, position rows and summary
//! lines, with every figure already formatted. The interactive summary
//! (JSON) and the PDF are both produced from this one value, and its money
//! comes only from [`OfferTotals`].

use serde::{Deserialize, Serialize};
use shared::models::{ItemTotals, LineItem, LineKind, Offer, OfferTotals, PricingMode};

use super::format::{format_money, format_percent, format_quantity};
use crate::offer_money::to_f64_exact;

/// Letterhead data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowKind {
    Item,
    /// Sub-row of the preceding item; included in its amount
    Filling,
    /// Sub-row of the preceding item; never priced
    Accessory,
    Fee,
}

/// One table row; empty strings mean "blank cell"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub kind: RowKind,
    pub position: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub quantity: String,
    pub unit_price: String,
    pub discount: String,
    pub vat_rate: String,
    /// Line amount before the global discount
    pub amount: String,
    /// What the line finally costs, global discount applied
    pub final_amount: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryKind {
    SubTotal,
    GlobalDiscount,
    NetTotal,
    Vat,
    GrandTotal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub kind: SummaryKind,
    pub label: String,
    pub value: String,
}

/// Offer laid out for display or print
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDocument {
    pub title: String,
    pub company: CompanyInfo,
    pub offer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    pub pricing_mode: PricingMode,
    pub rows: Vec<DocumentRow>,
    pub summary: Vec<SummaryLine>,
    /// Input corrections the editor should surface
    pub warning_count: usize,
}

impl QuoteDocument {
    pub fn build(offer: &Offer, totals: &OfferTotals, company: &CompanyInfo) -> Self {
        let title = match &offer.number {
            Some(number) => format!("Angebot {number}"),
            None => "Angebot".to_string(),
        };

        // item lines come in offer order; pair by position, ids may repeat
        let item_lines: Vec<&ItemTotals> = totals.item_lines().collect();
        let mut rows = Vec::new();
        for (index, item) in offer.items.iter().enumerate() {
            push_item_rows(&mut rows, index + 1, item, item_lines.get(index).copied());
        }
        for fee in totals.fee_lines() {
            let description = match fee.kind {
                LineKind::DeliveryFee => "Lieferung",
                LineKind::InstallationFee => "Montage",
                LineKind::Item => continue,
            };
            rows.push(DocumentRow {
                kind: RowKind::Fee,
                position: String::new(),
                description: description.to_string(),
                detail: None,
                quantity: "1".to_string(),
                unit_price: format_money(fee.net),
                discount: String::new(),
                vat_rate: format_percent(fee.vat_rate),
                amount: format_money(fee.amount),
                final_amount: format_money(fee.after_global_discount),
            });
        }

        Self {
            title,
            company: company.clone(),
            offer_id: offer.id.clone(),
            customer: offer.customer.clone(),
            pricing_mode: totals.pricing_mode,
            rows,
            summary: summary_lines(offer, totals),
            warning_count: totals.warnings.len(),
        }
    }

    pub fn summary_value(&self, kind: SummaryKind) -> Option<&str> {
        self.summary
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.value.as_str())
    }
}

fn push_item_rows(
    rows: &mut Vec<DocumentRow>,
    position: usize,
    item: &LineItem,
    line: Option<&ItemTotals>,
) {
    let (amount, final_amount) = line
        .map(|l| (format_money(l.amount), format_money(l.after_global_discount)))
        .unwrap_or_default();

    let detail = match (item.attribute_summary(), &item.description) {
        (Some(attrs), Some(desc)) => Some(format!("{attrs}\n{desc}")),
        (attrs, desc) => attrs.or_else(|| desc.clone()),
    };

    rows.push(DocumentRow {
        kind: RowKind::Item,
        position: position.to_string(),
        description: if item.name.trim().is_empty() {
            format!("Position {position}")
        } else {
            item.name.clone()
        },
        detail,
        quantity: format_quantity(item.quantity),
        unit_price: format_money(to_f64_exact(item.unit_price)),
        discount: percent_cell(to_f64_exact(item.discount_percent)),
        vat_rate: format_percent(to_f64_exact(item.vat_rate)),
        amount,
        final_amount,
    });

    for filling in &item.fillings {
        let description = [filling.spec.trim(), filling.dimensions.trim()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(DocumentRow {
            kind: RowKind::Filling,
            position: String::new(),
            description: if description.is_empty() {
                "Füllung".to_string()
            } else {
                format!("Füllung: {description}")
            },
            detail: None,
            quantity: "1".to_string(),
            unit_price: format_money(to_f64_exact(filling.price)),
            discount: percent_cell(to_f64_exact(filling.discount_percent)),
            vat_rate: String::new(),
            amount: String::new(),
            final_amount: String::new(),
        });
    }

    for accessory in &item.accessories {
        let description = match (accessory.code.trim(), accessory.description.trim()) {
            ("", d) => d.to_string(),
            (c, "") => c.to_string(),
            (c, d) => format!("{c} {d}"),
        };
        rows.push(DocumentRow {
            kind: RowKind::Accessory,
            position: String::new(),
            description: format!("Zubehör: {description}"),
            detail: None,
            quantity: format_quantity(accessory.qty),
            unit_price: String::new(),
            discount: String::new(),
            vat_rate: String::new(),
            amount: String::new(),
            final_amount: String::new(),
        });
    }
}

fn percent_cell(percent: f64) -> String {
    if percent == 0.0 {
        String::new()
    } else {
        format_percent(percent)
    }
}

fn summary_lines(offer: &Offer, totals: &OfferTotals) -> Vec<SummaryLine> {
    let line = |kind, label: String, value: f64| SummaryLine {
        kind,
        label,
        value: format_money(value),
    };
    let vat_lines = || {
        totals
            .vat_breakdown
            .iter()
            .filter(|e| e.amount != 0.0)
            .collect::<Vec<_>>()
    };

    let mut lines = Vec::new();
    let sub_label = match totals.pricing_mode {
        PricingMode::Net => "Zwischensumme netto",
        PricingMode::Gross => "Zwischensumme brutto",
    };
    lines.push(line(SummaryKind::SubTotal, sub_label.to_string(), totals.sub_total));

    if totals.discount_amount != 0.0 {
        let percent = to_f64_exact(offer.options.global_discount_percent);
        lines.push(line(
            SummaryKind::GlobalDiscount,
            format!("abzgl. {} Rabatt", format_percent(percent)),
            -totals.discount_amount,
        ));
    }

    match totals.pricing_mode {
        PricingMode::Net => {
            lines.push(line(SummaryKind::NetTotal, "Nettobetrag".to_string(), totals.net_total));
            for entry in vat_lines() {
                lines.push(line(
                    SummaryKind::Vat,
                    format!("zzgl. {} MwSt.", format_percent(entry.rate)),
                    entry.amount,
                ));
            }
            lines.push(line(SummaryKind::GrandTotal, "Gesamtbetrag".to_string(), totals.grand_total));
        }
        PricingMode::Gross => {
            lines.push(line(SummaryKind::GrandTotal, "Gesamtbetrag".to_string(), totals.grand_total));
            for entry in vat_lines() {
                lines.push(line(
                    SummaryKind::Vat,
                    format!("enthaltene {} MwSt.", format_percent(entry.rate)),
                    entry.amount,
                ));
            }
            lines.push(line(SummaryKind::NetTotal, "Nettobetrag".to_string(), totals.net_total));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer_money::to_decimal;
    use crate::pricing::compute_offer;
    use rust_decimal::Decimal;
    use shared::models::{Accessory, Filling, OfferOptions};

    fn dec(v: f64) -> Decimal {
        to_decimal(v)
    }

    fn company() -> CompanyInfo {
        CompanyInfo {
            name: "Fensterbau Muster GmbH".to_string(),
            address: Some("Hauptstr. 1, 12345 Musterstadt".to_string()),
            vat_id: Some("DE123456789".to_string()),
        }
    }

    fn offer(mode: PricingMode) -> Offer {
        Offer {
            id: "o-1".to_string(),
            number: Some("AN-2024-0042".to_string()),
            customer: Some("Familie Schmidt".to_string()),
            items: vec![
                LineItem::new("a")
                    .with_name("Fenster 2-flg.")
                    .with_dimensions(1230, 1480)
                    .with_quantity(dec(2.0))
                    .with_unit_price(dec(600.0))
                    .with_discount_percent(dec(5.0))
                    .with_vat_rate(dec(19.0))
                    .with_filling(
                        Filling::new("f-1", dec(80.0))
                            .with_spec("3-fach Verglasung")
                            .with_dimensions("1200 × 1450"),
                    )
                    .with_accessory(Accessory {
                        code: "OLIVE".to_string(),
                        description: "Fenstergriff".to_string(),
                        qty: dec(2.0),
                    }),
                LineItem::new("b")
                    .with_quantity(dec(1.0))
                    .with_unit_price(dec(1450.5))
                    .with_vat_rate(dec(7.0)),
            ],
            options: OfferOptions {
                global_discount_percent: dec(3.0),
                pricing_mode: mode,
                delivery_fee: dec(60.0),
                installation_fee: Decimal::ZERO,
                fee_vat_rate: dec(19.0),
            },
        }
    }

    #[test]
    fn test_rows_in_order() {
        let offer = offer(PricingMode::Net);
        let totals = compute_offer(&offer);
        let doc = QuoteDocument::build(&offer, &totals, &company());

        let kinds: Vec<RowKind> = doc.rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Item,
                RowKind::Filling,
                RowKind::Accessory,
                RowKind::Item,
                RowKind::Fee
            ]
        );
        assert_eq!(doc.title, "Angebot AN-2024-0042");
        assert_eq!(doc.rows[0].position, "1");
        assert_eq!(doc.rows[0].detail.as_deref(), Some("1230 × 1480 mm"));
        assert_eq!(doc.rows[0].discount, "5 %");
        assert_eq!(doc.rows[1].description, "Füllung: 3-fach Verglasung, 1200 × 1450");
        assert_eq!(doc.rows[2].description, "Zubehör: OLIVE Fenstergriff");
        assert!(doc.rows[2].amount.is_empty());
        assert_eq!(doc.rows[3].description, "Position 2");
        assert_eq!(doc.rows[4].description, "Lieferung");
    }

    #[test]
    fn test_figures_come_from_totals() {
        for mode in [PricingMode::Net, PricingMode::Gross] {
            let offer = offer(mode);
            let totals = compute_offer(&offer);
            let doc = QuoteDocument::build(&offer, &totals, &company());

            assert_eq!(
                doc.summary_value(SummaryKind::GrandTotal),
                Some(format_money(totals.grand_total).as_str())
            );
            assert_eq!(
                doc.summary_value(SummaryKind::SubTotal),
                Some(format_money(totals.sub_total).as_str())
            );
            assert_eq!(
                doc.summary_value(SummaryKind::NetTotal),
                Some(format_money(totals.net_total).as_str())
            );
            assert_eq!(doc.rows[0].amount, format_money(totals.per_item[0].amount));
            assert_eq!(
                doc.rows[0].final_amount,
                format_money(totals.per_item[0].after_global_discount)
            );
        }
    }

    #[test]
    fn test_summary_labels_follow_mode() {
        let net = offer(PricingMode::Net);
        let doc = QuoteDocument::build(&net, &compute_offer(&net), &company());
        let labels: Vec<&str> = doc.summary.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Zwischensumme netto",
                "abzgl. 3 % Rabatt",
                "Nettobetrag",
                "zzgl. 7 % MwSt.",
                "zzgl. 19 % MwSt.",
                "Gesamtbetrag"
            ]
        );

        let gross = offer(PricingMode::Gross);
        let doc = QuoteDocument::build(&gross, &compute_offer(&gross), &company());
        assert_eq!(doc.summary[0].label, "Zwischensumme brutto");
        assert!(doc.summary.iter().any(|l| l.label == "enthaltene 19 % MwSt."));
    }

    #[test]
    fn test_discount_line_is_negative() {
        let offer = offer(PricingMode::Net);
        let totals = compute_offer(&offer);
        let doc = QuoteDocument::build(&offer, &totals, &company());
        let value = doc.summary_value(SummaryKind::GlobalDiscount).unwrap();
        assert!(value.starts_with('-'));
    }

    #[test]
    fn test_final_amount_reflects_global_discount() {
        let offer = Offer::new("o-3")
            .with_options(OfferOptions {
                global_discount_percent: dec(10.0),
                delivery_fee: dec(50.0),
                ..Default::default()
            })
            .with_item(LineItem::new("a").with_quantity(dec(1.0)).with_unit_price(dec(100.0)));
        let totals = compute_offer(&offer);
        let doc = QuoteDocument::build(&offer, &totals, &CompanyInfo::default());

        assert_eq!(doc.rows[0].amount, "100,00 €");
        assert_eq!(doc.rows[0].final_amount, "90,00 €");
        // fees are not discounted
        assert_eq!(doc.rows[1].final_amount, "50,00 €");
        assert_eq!(doc.summary_value(SummaryKind::GrandTotal), Some("140,00 €"));
    }

    #[test]
    fn test_duplicate_ids_keep_their_own_amounts() {
        let offer = Offer::new("o-4")
            .with_item(LineItem::new("x").with_quantity(dec(1.0)).with_unit_price(dec(10.0)))
            .with_item(LineItem::new("x").with_quantity(dec(1.0)).with_unit_price(dec(999.0)));
        let totals = compute_offer(&offer);
        let doc = QuoteDocument::build(&offer, &totals, &CompanyInfo::default());

        assert_eq!(doc.rows[0].amount, "10,00 €");
        assert_eq!(doc.rows[1].amount, "999,00 €");
        assert_eq!(doc.summary_value(SummaryKind::SubTotal), Some("1.009,00 €"));
    }

    #[test]
    fn test_empty_offer_document() {
        let offer = Offer::new("o-2");
        let totals = compute_offer(&offer);
        let doc = QuoteDocument::build(&offer, &totals, &CompanyInfo::default());
        assert!(doc.rows.is_empty());
        assert_eq!(doc.title, "Angebot");
        assert_eq!(doc.summary_value(SummaryKind::GrandTotal), Some("0,00 €"));
        assert_eq!(doc.summary_value(SummaryKind::GlobalDiscount), None);
    }
}
