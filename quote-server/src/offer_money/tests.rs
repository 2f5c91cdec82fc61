use super::*;

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_accumulation_precision() {
    // Sum 0.01 one thousand times
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn test_non_finite_input_becomes_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    assert_eq!(to_decimal(f64::NEG_INFINITY), Decimal::ZERO);
}

#[test]
fn test_round_half_away_from_zero() {
    assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2)); // 1.005 -> 1.01
    assert_eq!(round_money(Decimal::new(1004, 3)), Decimal::new(100, 2)); // 1.004 -> 1.00
    assert_eq!(round_money(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
    assert_eq!(to_f64(Decimal::new(2_384_999, 4)), 238.5);
}

#[test]
fn test_rounding_only_at_output() {
    // 3 × 33.333... would lose a cent if each step were rounded
    let third = Decimal::ONE_HUNDRED / Decimal::from(3);
    let sum = third + third + third;
    assert_eq!(to_f64(sum), 100.0);
    assert_eq!(to_f64(round_money(third) * Decimal::from(3)), 99.99);
}

#[test]
fn test_percent_helpers() {
    assert_eq!(percent_factor(Decimal::from(10)), Decimal::new(9, 1));
    assert_eq!(percent_factor(Decimal::ZERO), Decimal::ONE);
    assert_eq!(percent_factor(Decimal::ONE_HUNDRED), Decimal::ZERO);
    assert_eq!(percent_of(Decimal::from(200), Decimal::from(19)), Decimal::from(38));
}

#[test]
fn test_clamp_percent() {
    assert_eq!(clamp_percent(Decimal::from(-5)), Decimal::ZERO);
    assert_eq!(clamp_percent(Decimal::from(150)), Decimal::ONE_HUNDRED);
    assert_eq!(clamp_percent(Decimal::new(125, 1)), Decimal::new(125, 1));
}

#[test]
fn test_money_eq_tolerance() {
    assert!(money_eq(238.0, 238.0));
    assert!(money_eq(238.0, 238.005));
    assert!(!money_eq(238.0, 238.02));
    assert!(!money_eq(238.0, 240.0));
}

#[test]
fn test_to_f64_exact_keeps_precision() {
    assert_eq!(to_f64_exact(Decimal::new(1255, 3)), 1.255);
    assert_eq!(to_f64_exact(Decimal::from(19)), 19.0);
}

#[test]
fn test_extremes_convert_without_falling_back_to_zero() {
    let max = to_f64_exact(Decimal::MAX);
    assert!(max.is_finite());
    assert!(max > 7.9e28);
    assert!(to_f64(Decimal::MAX) > 7.9e28);
    assert!(to_f64_exact(Decimal::MIN) < -7.9e28);
}
