//! German number formatting
//!
//! `1234.5` → `1.234,50 €`. Every monetary string in a quote document goes
//! through [`format_money`], so on-screen and printed figures match.

use rust_decimal::prelude::*;

use crate::offer_money::{round_money, to_decimal};

/// Group the integer part with '.' and use ',' as decimal separator
fn german(value: Decimal, min_dp: u32) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let mut plain = value.abs().normalize();
    if plain.scale() < min_dp {
        plain.rescale(min_dp);
    }
    let text = plain.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// `1.234,56 €`, rounded half away from zero
pub fn format_money(value: f64) -> String {
    format_money_decimal(to_decimal(value))
}

pub fn format_money_decimal(value: Decimal) -> String {
    format!("{} €", german(round_money(value), 2))
}

/// `19 %`, `7,5 %`
pub fn format_percent(value: f64) -> String {
    format!("{} %", german(to_decimal(value), 0))
}

/// Quantities without trailing zeros: `2`, `2,5`
pub fn format_quantity(value: Decimal) -> String {
    german(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0,00 €");
        assert_eq!(format_money(238.0), "238,00 €");
        assert_eq!(format_money(1234.56), "1.234,56 €");
        assert_eq!(format_money(1234567.8), "1.234.567,80 €");
        assert_eq!(format_money(999.999), "1.000,00 €");
        assert_eq!(format_money(-81.5), "-81,50 €");
    }

    #[test]
    fn test_format_percent_and_quantity() {
        assert_eq!(format_percent(19.0), "19 %");
        assert_eq!(format_percent(7.5), "7,5 %");
        assert_eq!(format_quantity(Decimal::from(2)), "2");
        assert_eq!(format_quantity(Decimal::new(25, 1)), "2,5");
        assert_eq!(format_quantity(Decimal::new(1500, 0)), "1.500");
    }
}
