use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::shared::locale::Locale;
use business::domain::withdrawal::model::CalculationResult;
use business::domain::withdrawal::rule::WithdrawalRule;
use business::domain::withdrawal::value_objects::WithdrawalStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum LocaleDto {
    #[oai(rename = "en")]
    En,
    #[oai(rename = "vi")]
    Vi,
}

impl From<LocaleDto> for Locale {
    fn from(dto: LocaleDto) -> Self {
        match dto {
            LocaleDto::En => Locale::En,
            LocaleDto::Vi => Locale::Vi,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum WithdrawalStatusDto {
    #[oai(rename = "safe")]
    Safe,
    #[oai(rename = "warning")]
    Warning,
    #[oai(rename = "expired")]
    Expired,
}

impl From<WithdrawalStatus> for WithdrawalStatusDto {
    fn from(status: WithdrawalStatus) -> Self {
        match status {
            WithdrawalStatus::Safe => WithdrawalStatusDto::Safe,
            WithdrawalStatus::Warning => WithdrawalStatusDto::Warning,
            WithdrawalStatus::Expired => WithdrawalStatusDto::Expired,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CalculateWithdrawalRequest {
    /// Manufacturing date (YYYY-MM-DD)
    #[oai(default)]
    pub manufacture_date: String,
    /// Expiry date (YYYY-MM-DD)
    #[oai(default)]
    pub expiry_date: String,
    /// Language for the status label and error messages (default: en)
    #[oai(skip_serializing_if_is_none)]
    pub locale: Option<LocaleDto>,
}

#[derive(Debug, Clone, Object)]
pub struct CalculationResponse {
    /// Manufacturing date
    pub manufacture_date: NaiveDate,
    /// Expiry date
    pub expiry_date: NaiveDate,
    /// Total shelf life in days
    pub total_days: i64,
    /// Length of the withdrawal window in days
    pub withdrawal_window_days: i64,
    /// Date by which the product must be pulled from sale
    pub pull_date: NaiveDate,
    /// Days from today until the pull date; negative once it has passed
    pub remaining_days: i64,
    /// Status classification
    pub status: WithdrawalStatusDto,
    /// Human-readable status
    pub status_label: String,
    /// The date the calculation was made against
    pub calculated_on: NaiveDate,
}

impl CalculationResponse {
    pub fn from_result(result: CalculationResult, locale: Locale) -> Self {
        Self {
            manufacture_date: result.manufacture_date,
            expiry_date: result.expiry_date,
            total_days: result.total_days,
            withdrawal_window_days: result.withdrawal_window_days,
            pull_date: result.pull_date,
            remaining_days: result.remaining_days,
            status_label: result.status.label(locale).to_string(),
            status: result.status.into(),
            calculated_on: result.calculated_on,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WithdrawalRuleResponse {
    /// Share of total shelf life that must remain for the product to stay on sale
    pub percentage: u8,
    /// Rule explanation
    pub description: String,
    /// How the pull date is derived
    pub formula: String,
}

impl WithdrawalRuleResponse {
    pub fn from_rule(rule: &WithdrawalRule, locale: Locale) -> Self {
        Self {
            percentage: rule.percentage,
            description: rule.describe(locale),
            formula: rule.formula(locale),
        }
    }
}
