//! Calculation logic for the income tax calculator.
//!
//! This module contains the slab engine, which turns a taxable income into a
//! tax amount, and the payroll deduction calculator, which derives taxable
//! income from a cost-to-company figure and reports tax payable and the
//! monthly in-hand salary.

mod payroll_deductions;
mod slab_engine;

pub use payroll_deductions::{
    CESS_MULTIPLIER, DEFAULT_BASIC_SHARE, GRATUITY_DAYS_PER_MONTH, GRATUITY_DAYS_PER_YEAR,
    IN_HAND_INSTALLMENTS, MEAL_CARD_ANNUAL, MONTHS_PER_YEAR, PROFESSIONAL_TAX_ANNUAL,
    PROVIDENT_FUND_ANNUAL, calculate_payroll, gratuity, resolve_basic_salary,
};
pub use slab_engine::{compute_tax, slab_charges};
