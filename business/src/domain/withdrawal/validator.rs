use chrono::NaiveDate;

use super::errors::ValidationError;
use super::model::ValidatedDates;

/// Format produced by HTML date pickers and accepted on every input boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True for text shaped exactly like `DDDD-DD-DD`.
///
/// chrono's `%Y` takes signed years of any width and `%m`/`%d` take single
/// digits, so the shape is checked before parsing.
fn is_iso_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// Returns `None` for empty or malformed text.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if !is_iso_date_shape(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

/// Checks both dates are present and correctly ordered.
///
/// Business rules:
/// - Either date empty or unparseable -> MissingField
/// - Manufacturing date on or after expiry date -> InvalidOrder
pub fn validate(
    raw_manufacture_date: &str,
    raw_expiry_date: &str,
) -> Result<ValidatedDates, ValidationError> {
    let (Some(manufacture_date), Some(expiry_date)) =
        (parse_date(raw_manufacture_date), parse_date(raw_expiry_date))
    else {
        return Err(ValidationError::MissingField);
    };

    if manufacture_date >= expiry_date {
        return Err(ValidationError::InvalidOrder);
    }

    Ok(ValidatedDates::new(manufacture_date, expiry_date))
}
