//! Payroll deduction calculation.
//!
//! This module derives taxable income from an annual cost-to-company figure
//! through a fixed sequence of deductions, runs the slab engine on it, applies
//! the cess and spreads the remainder into a monthly in-hand salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{PayrollBreakdown, PayrollInput};

use super::slab_engine::slab_charges;

/// Share of the annual CTC treated as basic salary when none is supplied (37%).
pub const DEFAULT_BASIC_SHARE: Decimal = Decimal::from_parts(37, 0, 0, false, 2);

/// Months in a year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Working days per month used by the gratuity formula.
pub const GRATUITY_DAYS_PER_MONTH: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// Days of basic salary accrued as gratuity per year of service.
pub const GRATUITY_DAYS_PER_YEAR: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Annual provident fund contribution: 1800 per month from both employer and
/// employee, `1800 * 2 * 12`.
pub const PROVIDENT_FUND_ANNUAL: Decimal = Decimal::from_parts(43_200, 0, 0, false, 0);

/// Annual professional tax.
pub const PROFESSIONAL_TAX_ANNUAL: Decimal = Decimal::from_parts(2_500, 0, 0, false, 0);

/// Annual meal card deduction: 2200 per month, `2200 * 12`.
pub const MEAL_CARD_ANNUAL: Decimal = Decimal::from_parts(26_400, 0, 0, false, 0);

/// Multiplier applying the 4% health and education cess.
pub const CESS_MULTIPLIER: Decimal = Decimal::from_parts(104, 0, 0, false, 2);

/// Number of installments the post-tax income is spread over.
pub const IN_HAND_INSTALLMENTS: Decimal = Decimal::from_parts(13, 0, 0, false, 0);

/// Resolves the monthly basic salary.
///
/// A supplied value is used as-is when it is strictly positive. Otherwise
/// the basic is derived as 37% of the annual CTC, spread over twelve months
/// and truncated.
///
/// # Examples
///
/// ```
/// use income_tax_calculator::calculation::resolve_basic_salary;
/// use rust_decimal::Decimal;
///
/// let gross = Decimal::from(1_200_000);
/// assert_eq!(resolve_basic_salary(gross, None), Decimal::from(37_000));
/// assert_eq!(
///     resolve_basic_salary(gross, Some(Decimal::from(50_000))),
///     Decimal::from(50_000)
/// );
/// ```
pub fn resolve_basic_salary(gross_annual_income: Decimal, supplied: Option<Decimal>) -> Decimal {
    match supplied {
        Some(basic) if basic > Decimal::ZERO => basic,
        _ => (gross_annual_income * DEFAULT_BASIC_SHARE / MONTHS_PER_YEAR).trunc(),
    }
}

/// Returns the annual gratuity for a monthly basic salary, truncated.
pub fn gratuity(basic_salary_monthly: Decimal) -> Decimal {
    (basic_salary_monthly / GRATUITY_DAYS_PER_MONTH * GRATUITY_DAYS_PER_YEAR).trunc()
}

/// Calculates tax payable and monthly in-hand salary.
///
/// The deductions are applied in a fixed order, truncating toward zero at
/// each step:
///
/// 1. Resolve the monthly basic salary ([`resolve_basic_salary`])
/// 2. Gratuity on the basic ([`gratuity`])
/// 3. Provident fund contribution ([`PROVIDENT_FUND_ANNUAL`])
/// 4. Professional tax ([`PROFESSIONAL_TAX_ANNUAL`])
/// 5. Taxable income is CTC less the three deductions above
/// 6. Meal card deduction when opted ([`MEAL_CARD_ANNUAL`])
/// 7. Raw tax from the slab engine
/// 8. Tax payable after the 4% cess
/// 9. In-hand salary is taxable income less tax payable over thirteen
///    installments
///
/// # Examples
///
/// ```
/// use income_tax_calculator::calculation::calculate_payroll;
/// use income_tax_calculator::models::PayrollInput;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_payroll(&PayrollInput::new(Decimal::from(1_200_000)));
///
/// assert_eq!(breakdown.taxable_income, Decimal::from(1_106_554));
/// assert_eq!(breakdown.tax_payable, Decimal::from(52_681));
/// assert_eq!(breakdown.in_hand_monthly_salary, Decimal::from(81_067));
/// ```
pub fn calculate_payroll(input: &PayrollInput) -> PayrollBreakdown {
    let gross = input.gross_annual_income;
    debug!(ctc = %gross, "Starting payroll calculation");

    let basic_salary_monthly = resolve_basic_salary(gross, input.basic_salary_monthly);
    debug!(basic = %basic_salary_monthly, "Resolved basic salary");

    let gratuity = gratuity(basic_salary_monthly);
    debug!(gratuity = %gratuity, "Computed gratuity");
    debug!(provident_fund = %PROVIDENT_FUND_ANNUAL, "Applied provident fund");

    let mut taxable_income =
        (gross - gratuity - PROVIDENT_FUND_ANNUAL - PROFESSIONAL_TAX_ANNUAL).trunc();

    let meal_card_deduction = if input.meal_card_opted {
        taxable_income = (taxable_income - MEAL_CARD_ANNUAL).trunc();
        MEAL_CARD_ANNUAL
    } else {
        Decimal::ZERO
    };
    debug!(
        taxable_income = %taxable_income,
        meal_card_opted = input.meal_card_opted,
        "Computed taxable income"
    );

    let slab_charges = slab_charges(taxable_income);
    let raw_tax: Decimal = slab_charges.iter().map(|charge| charge.tax).sum();
    debug!(raw_tax = %raw_tax, slabs = slab_charges.len(), "Computed raw tax");

    let tax_payable = (raw_tax * CESS_MULTIPLIER).trunc();
    debug!(tax_payable = %tax_payable, "Applied cess");

    let in_hand_monthly_salary = ((taxable_income - tax_payable) / IN_HAND_INSTALLMENTS).trunc();
    debug!(inhand_salary = %in_hand_monthly_salary, "Computed in-hand salary");

    PayrollBreakdown {
        gross_annual_income: gross,
        basic_salary_monthly,
        gratuity,
        provident_fund: PROVIDENT_FUND_ANNUAL,
        professional_tax: PROFESSIONAL_TAX_ANNUAL,
        meal_card_deduction,
        taxable_income,
        raw_tax,
        tax_payable,
        in_hand_monthly_salary,
        slab_charges,
    }
}
