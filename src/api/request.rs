//! Request types for the income tax calculator API.
//!
//! This module defines the query parameters of the `/calculateTax` endpoint
//! and the parse-and-validate step that turns them into a [`PayrollInput`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::error::{EngineError, EngineResult};
use crate::models::PayrollInput;

/// Raw query parameters for the `/calculateTax` endpoint.
///
/// Every field is kept as a string so that malformed values reach the
/// validation step instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalculateTaxQuery {
    /// The CTC (annual income).
    #[param(value_type = f64, required = true)]
    pub income: Option<String>,
    /// The monthly basic salary. (Optional)
    #[param(value_type = Option<f64>)]
    pub basic: Option<String>,
    /// Whether the meal card is opted. (Optional)
    #[serde(rename = "mealCardOpted")]
    #[param(value_type = Option<String>, example = "true")]
    pub meal_card_opted: Option<String>,
}

/// A validated calculation request.
///
/// Carries the typed core input together with the income exactly as the
/// caller supplied it, which is echoed back in the response.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuery {
    /// The income as parsed from the query.
    pub income: f64,
    /// The typed input for the deduction calculator.
    pub input: PayrollInput,
}

impl CalculateTaxQuery {
    /// Validates the query and converts it into a calculator input.
    ///
    /// # Returns
    ///
    /// Returns `InvalidIncome` if `income` is missing, is not a finite
    /// number, or is not strictly positive. An unusable `basic` is dropped
    /// so the calculator derives it instead.
    pub fn validate(&self) -> EngineResult<ValidatedQuery> {
        let invalid = || EngineError::InvalidIncome {
            raw: self.income.clone(),
        };

        let income = self
            .income
            .as_deref()
            .and_then(parse_number)
            .filter(|value| *value > 0.0)
            .ok_or_else(invalid)?;
        let gross_annual_income = Decimal::try_from(income).map_err(|_| invalid())?;

        let basic_salary_monthly = self
            .basic
            .as_deref()
            .and_then(parse_number)
            .filter(|value| *value >= 0.0)
            .and_then(|value| Decimal::try_from(value).ok());

        Ok(ValidatedQuery {
            income,
            input: PayrollInput {
                gross_annual_income,
                basic_salary_monthly,
                meal_card_opted: meal_card_opted(self.meal_card_opted.as_deref()),
            },
        })
    }
}

/// Parses a query value as a finite floating-point number.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Only the literal string `false` opts out of the meal card.
fn meal_card_opted(raw: Option<&str>) -> bool {
    raw != Some("false")
}
