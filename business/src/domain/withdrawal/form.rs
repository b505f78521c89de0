use chrono::NaiveDate;

use super::calculator::calculate;
use super::errors::ValidationError;
use super::model::{CalculationResult, DateInput};
use super::validator::validate;

/// Which date field of the form is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ManufactureDate,
    ExpiryDate,
}

/// Snapshot of the calculator form.
///
/// Every transition returns a new snapshot; the presentation layer owns the
/// current one and re-renders from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    input: DateInput,
    result: Option<CalculationResult>,
    error: Option<ValidationError>,
}

impl FormState {
    pub fn input(&self) -> &DateInput {
        &self.input
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Sets one field. Editing clears the error but keeps the last result on screen.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut input = self.input.clone();
        match field {
            FormField::ManufactureDate => input.manufacture_date = value.into(),
            FormField::ExpiryDate => input.expiry_date = value.into(),
        }

        Self {
            input,
            result: self.result.clone(),
            error: None,
        }
    }

    /// Validates the current input and calculates against `today`.
    ///
    /// A failed submission records the error and leaves the previous result untouched.
    pub fn submit(&self, today: NaiveDate) -> Self {
        match validate(&self.input.manufacture_date, &self.input.expiry_date) {
            Ok(dates) => Self {
                input: self.input.clone(),
                result: Some(calculate(&dates, today)),
                error: None,
            },
            Err(error) => Self {
                input: self.input.clone(),
                result: self.result.clone(),
                error: Some(error),
            },
        }
    }

    pub fn reset(&self) -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::withdrawal::value_objects::WithdrawalStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()
    }

    fn filled() -> FormState {
        FormState::default()
            .with_field(FormField::ManufactureDate, "2024-01-01")
            .with_field(FormField::ExpiryDate, "2024-12-31")
    }

    #[test]
    fn should_start_empty() {
        let state = FormState::default();

        assert_eq!(state.input(), &DateInput::default());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn should_store_result_when_submission_is_valid() {
        let state = filled().submit(today());

        assert_eq!(state.input(), &DateInput::new("2024-01-01", "2024-12-31"));
        let result = state.result().unwrap();
        assert_eq!(result.status, WithdrawalStatus::Warning);
        assert_eq!(result.remaining_days, -1);
        assert!(state.error().is_none());
    }

    #[test]
    fn should_store_error_when_field_is_missing() {
        let state = FormState::default()
            .with_field(FormField::ManufactureDate, "2024-01-01")
            .submit(today());

        assert_eq!(state.error(), Some(&ValidationError::MissingField));
        assert!(state.result().is_none());
    }

    #[test]
    fn should_keep_previous_result_when_later_submission_fails() {
        let calculated = filled().submit(today());

        let state = calculated
            .with_field(FormField::ExpiryDate, "2023-12-31")
            .submit(today());

        assert_eq!(state.error(), Some(&ValidationError::InvalidOrder));
        assert_eq!(state.result(), calculated.result());
    }

    #[test]
    fn should_clear_error_when_a_field_changes() {
        let failed = FormState::default().submit(today());
        assert!(failed.error().is_some());

        let state = failed.with_field(FormField::ExpiryDate, "2024-12-31");

        assert!(state.error().is_none());
        assert_eq!(state.input().expiry_date, "2024-12-31");
    }

    #[test]
    fn should_leave_original_snapshot_untouched() {
        let before = filled();

        let _after = before.submit(today());

        assert!(before.result().is_none());
    }

    #[test]
    fn should_clear_everything_on_reset() {
        let state = filled().submit(today()).reset();

        assert_eq!(state, FormState::default());
    }
}
