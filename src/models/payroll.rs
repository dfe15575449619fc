//! Payroll input and result models.
//!
//! This module defines the typed [`PayrollInput`] handed to the deduction
//! calculator and the [`PayrollBreakdown`] it produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SlabCharge;

/// The inputs to a single payroll calculation.
///
/// # Example
///
/// ```
/// use income_tax_calculator::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = PayrollInput::new(Decimal::from(1_200_000));
/// assert_eq!(input.basic_salary_monthly, None);
/// assert!(input.meal_card_opted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The annual cost-to-company figure.
    pub gross_annual_income: Decimal,
    /// The monthly basic salary, if the caller supplied a usable one.
    #[serde(default)]
    pub basic_salary_monthly: Option<Decimal>,
    /// Whether the meal card deduction applies.
    #[serde(default = "default_meal_card_opted")]
    pub meal_card_opted: bool,
}

fn default_meal_card_opted() -> bool {
    true
}

impl PayrollInput {
    /// Creates an input with a derived basic salary and the meal card opted in.
    pub fn new(gross_annual_income: Decimal) -> Self {
        Self {
            gross_annual_income,
            basic_salary_monthly: None,
            meal_card_opted: true,
        }
    }

    /// Sets the monthly basic salary.
    pub fn with_basic_salary(mut self, basic_salary_monthly: Decimal) -> Self {
        self.basic_salary_monthly = Some(basic_salary_monthly);
        self
    }

    /// Sets whether the meal card deduction applies.
    pub fn with_meal_card(mut self, meal_card_opted: bool) -> Self {
        self.meal_card_opted = meal_card_opted;
        self
    }
}

/// Every figure derived while computing tax and in-hand salary.
///
/// All derived amounts are whole numbers; `gross_annual_income` is echoed
/// exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The annual cost-to-company figure, unchanged.
    pub gross_annual_income: Decimal,
    /// The monthly basic salary used for the gratuity deduction.
    pub basic_salary_monthly: Decimal,
    /// The annual gratuity deduction.
    pub gratuity: Decimal,
    /// The annual provident fund contribution.
    pub provident_fund: Decimal,
    /// The annual professional tax.
    pub professional_tax: Decimal,
    /// The annual meal card deduction (zero when not opted).
    pub meal_card_deduction: Decimal,
    /// Income after all deductions, fed to the slab engine.
    pub taxable_income: Decimal,
    /// Tax computed by the slab engine before the cess.
    pub raw_tax: Decimal,
    /// Tax after the 4% cess.
    pub tax_payable: Decimal,
    /// Monthly in-hand salary over thirteen installments.
    pub in_hand_monthly_salary: Decimal,
    /// Per-slab charges that make up `raw_tax`.
    pub slab_charges: Vec<SlabCharge>,
}
