//! Monthly-series validator
//!
//! A monthly series arrives as a JSON object keyed by month number:
//!
//! ```json
//! {"1": 120.0, "2": 110.5, ..., "12": 115.0}
//! ```
//!
//! The validator enforces the exact shape - twelve entries, keys `"1"`
//! through `"12"`, every value a non-negative number. Key order is
//! irrelevant. No coercion is performed: `"3.5"` (a string) and `true` are
//! both rejected, since JSON booleans are not numbers here.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validator,
};

/// Number of entries a monthly series must hold.
pub const MONTHS_PER_YEAR: usize = 12;

/// Validator enforcing the twelve-month series shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlySeriesValidator;

impl Validator for MonthlySeriesValidator {
    type Value<'a> = Value;

    fn validate(&self, value: &Self::Value<'_>) -> ValidationResult<()> {
        self.check(value)
    }
}

impl MonthlySeriesValidator {
    /// Validate a raw JSON value as a monthly series.
    pub fn check(&self, value: &Value) -> ValidationResult<()> {
        let Some(object) = value.as_object() else {
            return Err(ValidationError::NotAnObject);
        };

        if object.len() != MONTHS_PER_YEAR {
            return Err(ValidationError::WrongEntryCount {
                expected: MONTHS_PER_YEAR,
                actual: object.len(),
            });
        }

        for month in 1..=MONTHS_PER_YEAR as u8 {
            let Some(entry) = object.get(&month.to_string()) else {
                return Err(ValidationError::MissingMonth { month });
            };

            if !is_non_negative_number(entry) {
                return Err(ValidationError::InvalidMonthValue { month });
            }
        }

        Ok(())
    }
}

/// Strict numeric check: a JSON number that is finite and >= 0.
///
/// `Value::Bool` is a distinct variant, so booleans never reach the numeric
/// branch and are rejected with the rest of the non-numbers.
fn is_non_negative_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0),
        _ => false,
    }
}

/// A validated monthly series as a typed map.
///
/// For callers that want the numbers rather than the wire shape; conversion
/// runs the same checks as [`MonthlySeriesValidator`], so a constructed
/// `MonthlySeries` always holds exactly twelve non-negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries(BTreeMap<u8, f64>);

impl MonthlySeries {
    /// Value for `month` (1-12), if the month number is in range.
    pub fn get(&self, month: u8) -> Option<f64> {
        self.0.get(&month).copied()
    }

    /// Sum over all twelve months.
    pub fn annual_total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Iterate `(month, value)` in month order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }
}

impl TryFrom<&Value> for MonthlySeries {
    type Error = ValidationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        MonthlySeriesValidator.check(value)?;

        let object = value.as_object().expect("checked to be an object");
        let map = (1..=MONTHS_PER_YEAR as u8)
            .map(|month| {
                let v = object[&month.to_string()]
                    .as_f64()
                    .expect("checked to be numeric");
                (month, v)
            })
            .collect();

        Ok(Self(map))
    }
}
