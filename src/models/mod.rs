//! Core data models for the income tax calculator.
//!
//! This module contains the domain models shared by the calculation and API layers.

mod payroll;
mod tax_slab;

pub use payroll::{PayrollBreakdown, PayrollInput};
pub use tax_slab::{SlabCharge, TAX_SLABS, TaxSlab};
