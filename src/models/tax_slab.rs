//! Tax slab model and the fixed progressive slab table.
//!
//! This module defines the [`TaxSlab`] band type, the [`SlabCharge`] record
//! produced when a band is taxed, and the process-wide [`TAX_SLABS`] table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous income band taxed at a single marginal rate.
///
/// The lower bound of a slab is implied by the upper bound of the slab
/// before it (zero for the first slab).
///
/// # Example
///
/// ```
/// use income_tax_calculator::models::TaxSlab;
/// use rust_decimal::Decimal;
///
/// let slab = TaxSlab::bounded(Decimal::from(800_000), Decimal::new(5, 2));
/// assert_eq!(slab.upper_bound, Some(Decimal::from(800_000)));
/// assert!(!slab.is_unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// The inclusive upper bound of the band; `None` for the top band.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate applied within the band, in `[0, 1)`.
    pub rate: Decimal,
}

impl TaxSlab {
    /// Creates a slab that ends at `upper_bound`.
    pub const fn bounded(upper_bound: Decimal, rate: Decimal) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    /// Creates the open-ended top slab.
    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }

    /// Returns true if this slab has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }
}

/// The tax accrued within one slab while walking the table.
///
/// `tax` is already truncated toward zero; summing the charges of a
/// traversal gives the slab engine's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabCharge {
    /// The lower bound of the slab.
    pub lower_bound: Decimal,
    /// The upper bound of the slab, if any.
    pub upper_bound: Option<Decimal>,
    /// The marginal rate of the slab.
    pub rate: Decimal,
    /// The portion of income taxed in this slab.
    pub taxed_amount: Decimal,
    /// The truncated tax for this slab.
    pub tax: Decimal,
}

const fn whole(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn percent(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// The progressive slab table, ordered by ascending upper bound.
pub const TAX_SLABS: [TaxSlab; 7] = [
    TaxSlab::bounded(whole(400_000), percent(0)),
    TaxSlab::bounded(whole(800_000), percent(5)),
    TaxSlab::bounded(whole(1_200_000), percent(10)),
    TaxSlab::bounded(whole(1_600_000), percent(15)),
    TaxSlab::bounded(whole(2_000_000), percent(20)),
    TaxSlab::bounded(whole(2_400_000), percent(25)),
    TaxSlab::unbounded(percent(30)),
];
