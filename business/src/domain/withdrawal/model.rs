use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value_objects::WithdrawalStatus;

/// Raw form values, exactly as typed or picked by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateInput {
    pub manufacture_date: String,
    pub expiry_date: String,
}

impl DateInput {
    pub fn new(manufacture_date: impl Into<String>, expiry_date: impl Into<String>) -> Self {
        Self {
            manufacture_date: manufacture_date.into(),
            expiry_date: expiry_date.into(),
        }
    }
}

/// A manufacturing/expiry pair that passed validation.
///
/// Only the validator builds one, so `manufacture_date < expiry_date` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedDates {
    manufacture_date: NaiveDate,
    expiry_date: NaiveDate,
}

impl ValidatedDates {
    pub(crate) fn new(manufacture_date: NaiveDate, expiry_date: NaiveDate) -> Self {
        Self {
            manufacture_date,
            expiry_date,
        }
    }

    pub fn manufacture_date(&self) -> NaiveDate {
        self.manufacture_date
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }
}

/// Outcome of a withdrawal calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub manufacture_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub total_days: i64,
    pub withdrawal_window_days: i64,
    pub pull_date: NaiveDate,
    /// Days from `calculated_on` to `pull_date`. Zero or negative once the pull date is reached.
    pub remaining_days: i64,
    pub status: WithdrawalStatus,
    pub calculated_on: NaiveDate,
}
