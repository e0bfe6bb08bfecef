//! Property-based tests for the calculation engine.
//!
//! Tests validate:
//! 1. Density constant depends only on the run size
//! 2. Divisors: 100 for A3, 200 for A4, 5000 for drying
//! 3. Out-of-range input never yields a result

use inkcalc::engine::{self, compute, compute_from_text};
use inkcalc::model::{PaperFormat, Quantity};
use proptest::prelude::*;

fn any_format() -> impl Strategy<Value = PaperFormat> {
    prop_oneof![Just(PaperFormat::A3), Just(PaperFormat::A4)]
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ===== Property 1: Density Constant =====

proptest! {
    #[test]
    fn small_runs_use_point_four(quantity in 1u32..=5000) {
        let quantity = Quantity::new(quantity).unwrap();
        prop_assert_eq!(engine::ink_density_constant(quantity), 0.4);
    }

    #[test]
    fn large_runs_use_point_three(quantity in 5001u32..=1_000_000) {
        let quantity = Quantity::new(quantity).unwrap();
        prop_assert_eq!(engine::ink_density_constant(quantity), 0.3);
    }
}

// ===== Property 2: Divisors =====

proptest! {
    #[test]
    fn ink_grams_match_formula(
        quantity in 1u32..=1_000_000,
        coverage in 1u32..=100,
        format in any_format(),
    ) {
        let result = compute(quantity, coverage, format).unwrap();
        let density = if quantity > 5000 { 0.3 } else { 0.4 };
        let divisor = match format {
            PaperFormat::A3 => 100.0,
            PaperFormat::A4 => 200.0,
        };
        let mass = density * f64::from(coverage) * f64::from(quantity);

        prop_assert!(approx_eq(result.ink_grams, mass / divisor));
        prop_assert!(approx_eq(result.ink_grams_with_drying, mass / 5000.0));
        prop_assert!(result.ink_grams.is_finite());
    }

    #[test]
    fn drying_mass_is_format_independent(
        quantity in 1u32..=1_000_000,
        coverage in 1u32..=100,
    ) {
        let a3 = compute(quantity, coverage, PaperFormat::A3).unwrap();
        let a4 = compute(quantity, coverage, PaperFormat::A4).unwrap();
        prop_assert_eq!(a3.ink_grams_with_drying, a4.ink_grams_with_drying);
    }

    #[test]
    fn compute_is_deterministic(
        quantity in 1u32..=1_000_000,
        coverage in 1u32..=100,
        format in any_format(),
    ) {
        prop_assert_eq!(
            compute(quantity, coverage, format),
            compute(quantity, coverage, format)
        );
    }

    #[test]
    fn text_entry_agrees_with_typed_entry(
        quantity in 1u32..=1_000_000,
        coverage in 1u32..=100,
        format in any_format(),
    ) {
        let from_text = compute_from_text(
            &quantity.to_string(),
            &coverage.to_string(),
            Some(format.as_str()),
        );
        prop_assert_eq!(from_text, compute(quantity, coverage, format));
    }
}

// ===== Property 3: Validation =====

proptest! {
    #[test]
    fn quantity_above_maximum_is_rejected(quantity in 1_000_001u32.., coverage in 1u32..=100) {
        prop_assert!(compute(quantity, coverage, PaperFormat::A4).is_err());
    }

    #[test]
    fn coverage_above_maximum_is_rejected(quantity in 1u32..=1_000_000, coverage in 101u32..) {
        prop_assert!(compute(quantity, coverage, PaperFormat::A3).is_err());
    }

    #[test]
    fn non_numeric_quantity_is_rejected(text in "[a-zA-Z ,.]*") {
        prop_assert!(compute_from_text(&text, "50", Some("A4")).is_err());
    }
}
