//! Progressive slab tax computation.
//!
//! This module walks the fixed [`TAX_SLABS`] table and accrues tax band by
//! band. Each band's contribution is truncated toward zero before it is added
//! to the running total.

use rust_decimal::Decimal;

use crate::models::{SlabCharge, TAX_SLABS};

/// Returns the per-slab charges for a taxable income.
///
/// The walk keeps a running lower bound, starting at zero. While the income
/// exceeds a slab's upper bound the full width of that slab is charged;
/// the first slab the income does not exceed (or the unbounded top slab) is
/// charged on the remaining partial width and ends the walk.
///
/// Incomes at or below zero are not special-cased and produce a single
/// charge against the first slab.
///
/// # Examples
///
/// ```
/// use income_tax_calculator::calculation::slab_charges;
/// use rust_decimal::Decimal;
///
/// let charges = slab_charges(Decimal::from(1_000_000));
/// assert_eq!(charges.len(), 3);
/// assert_eq!(charges[1].tax, Decimal::from(20_000));
/// assert_eq!(charges[2].tax, Decimal::from(20_000));
/// ```
pub fn slab_charges(taxable_income: Decimal) -> Vec<SlabCharge> {
    let mut charges = Vec::new();
    let mut previous_bound = Decimal::ZERO;

    for slab in &TAX_SLABS {
        match slab.upper_bound {
            Some(bound) if taxable_income > bound => {
                let taxed_amount = bound - previous_bound;
                charges.push(SlabCharge {
                    lower_bound: previous_bound,
                    upper_bound: slab.upper_bound,
                    rate: slab.rate,
                    taxed_amount,
                    tax: (taxed_amount * slab.rate).trunc(),
                });
                previous_bound = bound;
            }
            _ => {
                let taxed_amount = taxable_income - previous_bound;
                charges.push(SlabCharge {
                    lower_bound: previous_bound,
                    upper_bound: slab.upper_bound,
                    rate: slab.rate,
                    taxed_amount,
                    tax: (taxed_amount * slab.rate).trunc(),
                });
                break;
            }
        }
    }

    charges
}

/// Computes the tax on a taxable income using the slab table.
///
/// The result is the sum of the truncated per-slab charges from
/// [`slab_charges`], so it is always a whole number.
///
/// # Examples
///
/// ```
/// use income_tax_calculator::calculation::compute_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_tax(Decimal::from(400_000)), Decimal::ZERO);
/// assert_eq!(compute_tax(Decimal::from(800_000)), Decimal::from(20_000));
/// assert_eq!(compute_tax(Decimal::from(1_106_554)), Decimal::from(50_655));
/// ```
pub fn compute_tax(taxable_income: Decimal) -> Decimal {
    slab_charges(taxable_income)
        .iter()
        .map(|charge| charge.tax)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_income_has_no_tax() {
        assert_eq!(compute_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_first_slab_is_tax_free() {
        assert_eq!(compute_tax(dec("250000")), Decimal::ZERO);
        assert_eq!(compute_tax(dec("400000")), Decimal::ZERO);
    }

    #[test]
    fn test_income_at_bound_stays_in_lower_slab() {
        let charges = slab_charges(dec("800000"));

        assert_eq!(charges.len(), 2);
        assert_eq!(charges[1].taxed_amount, dec("400000"));
        assert_eq!(charges[1].tax, dec("20000"));
    }

    #[test]
    fn test_partial_slab_is_truncated() {
        // 0.5 * 5% = 0.025 -> 0
        assert_eq!(compute_tax(dec("400000.5")), Decimal::ZERO);
        // 19 * 5% = 0.95 -> 0
        assert_eq!(compute_tax(dec("400019")), Decimal::ZERO);
        // 20 * 5% = 1
        assert_eq!(compute_tax(dec("400020")), Decimal::ONE);
    }

    #[test]
    fn test_one_unit_above_bound_rounds_away() {
        assert_eq!(compute_tax(dec("800001")), dec("20000"));
        assert_eq!(compute_tax(dec("800010")), dec("20001"));
    }

    #[test]
    fn test_reference_taxable_income() {
        // 20000 + trunc(306554 * 0.10) = 20000 + 30655
        assert_eq!(compute_tax(dec("1106554")), dec("50655"));
    }

    #[test]
    fn test_top_slab_is_unbounded() {
        // 20000 + 40000 + 60000 + 80000 + 100000 + 600000 * 0.30
        let charges = slab_charges(dec("3000000"));

        assert_eq!(charges.len(), 7);
        assert_eq!(charges[6].upper_bound, None);
        assert_eq!(charges[6].taxed_amount, dec("600000"));
        assert_eq!(compute_tax(dec("3000000")), dec("480000"));
    }

    #[test]
    fn test_charges_are_contiguous() {
        let charges = slab_charges(dec("2500000"));

        assert_eq!(charges[0].lower_bound, Decimal::ZERO);
        for pair in charges.windows(2) {
            assert_eq!(Some(pair[1].lower_bound), pair[0].upper_bound);
        }
    }

    #[test]
    fn test_negative_income_is_charged_against_first_slab() {
        let charges = slab_charges(dec("-15000"));

        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].taxed_amount, dec("-15000"));
        assert_eq!(compute_tax(dec("-15000")), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_tax_is_non_decreasing(a in 0i64..10_000_000, b in 0i64..10_000_000) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_tax(Decimal::from(low)) <= compute_tax(Decimal::from(high)));
        }

        #[test]
        fn prop_tax_is_whole_and_non_negative(income in 0i64..10_000_000) {
            let tax = compute_tax(Decimal::from(income));
            prop_assert_eq!(tax, tax.trunc());
            prop_assert!(tax >= Decimal::ZERO);
        }

        #[test]
        fn prop_one_unit_step_is_bounded_by_marginal_rate(income in 0i64..10_000_000) {
            let step = compute_tax(Decimal::from(income + 1)) - compute_tax(Decimal::from(income));
            prop_assert!(step >= Decimal::ZERO);
            prop_assert!(step <= Decimal::ONE);
        }

        #[test]
        fn prop_tax_is_sum_of_truncated_charges(cents in 0i64..1_000_000_000) {
            let income = Decimal::new(cents, 2);
            let charges = slab_charges(income);
            for charge in &charges {
                prop_assert_eq!(charge.tax, charge.tax.trunc());
            }
            let total: Decimal = charges.iter().map(|c| c.tax).sum();
            prop_assert_eq!(compute_tax(income), total);
        }
    }
}
