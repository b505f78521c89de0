use chrono::{Duration, NaiveDate};

use super::model::{CalculationResult, ValidatedDates};
use super::rule::WithdrawalRule;
use super::value_objects::WithdrawalStatus;

/// Length of the withdrawal window for a shelf life of `total_days`.
///
/// Rounds half up in integer arithmetic, so no float error creeps into the day count.
pub fn withdrawal_window_days(total_days: i64, rule: &WithdrawalRule) -> i64 {
    (total_days * i64::from(rule.percentage) + 50) / 100
}

/// Classifies `today` against the pull and expiry dates.
///
/// Business rules, first match wins:
/// - On or after expiry -> Expired
/// - On or after pull date -> Warning
/// - Otherwise -> Safe
pub fn classify(
    today: NaiveDate,
    pull_date: NaiveDate,
    expiry_date: NaiveDate,
) -> WithdrawalStatus {
    if today >= expiry_date {
        return WithdrawalStatus::Expired;
    }

    if today >= pull_date {
        return WithdrawalStatus::Warning;
    }

    WithdrawalStatus::Safe
}

/// Computes the pull date and status for validated dates under the standard 20% rule.
pub fn calculate(dates: &ValidatedDates, today: NaiveDate) -> CalculationResult {
    calculate_with_rule(dates, today, &WithdrawalRule::standard())
}

pub fn calculate_with_rule(
    dates: &ValidatedDates,
    today: NaiveDate,
    rule: &WithdrawalRule,
) -> CalculationResult {
    let manufacture_date = dates.manufacture_date();
    let expiry_date = dates.expiry_date();

    let total_days = (expiry_date - manufacture_date).num_days();
    debug_assert!(total_days > 0, "validated dates must be strictly ordered");

    let withdrawal_window_days = withdrawal_window_days(total_days, rule);
    let pull_date = expiry_date - Duration::days(withdrawal_window_days);
    let remaining_days = (pull_date - today).num_days();

    CalculationResult {
        manufacture_date,
        expiry_date,
        total_days,
        withdrawal_window_days,
        pull_date,
        remaining_days,
        status: classify(today, pull_date, expiry_date),
        calculated_on: today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::withdrawal::validator::validate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2024() -> ValidatedDates {
        validate("2024-01-01", "2024-12-31").unwrap()
    }

    #[test]
    fn should_compute_pull_date_for_a_full_year() {
        let result = calculate(&year_2024(), date(2024, 3, 1));

        assert_eq!(result.total_days, 365);
        assert_eq!(result.withdrawal_window_days, 73);
        assert_eq!(result.pull_date, date(2024, 10, 19));
    }

    #[test]
    fn should_be_safe_when_today_is_before_pull_date() {
        let result = calculate(&year_2024(), date(2024, 10, 18));

        assert_eq!(result.status, WithdrawalStatus::Safe);
        assert_eq!(result.remaining_days, 1);
    }

    #[test]
    fn should_warn_when_today_is_the_pull_date() {
        let result = calculate(&year_2024(), date(2024, 10, 19));

        assert_eq!(result.status, WithdrawalStatus::Warning);
        assert_eq!(result.remaining_days, 0);
    }

    #[test]
    fn should_warn_with_negative_remaining_days_inside_window() {
        let result = calculate(&year_2024(), date(2024, 10, 20));

        assert_eq!(result.status, WithdrawalStatus::Warning);
        assert_eq!(result.remaining_days, -1);
    }

    #[test]
    fn should_be_expired_on_the_expiry_date() {
        let result = calculate(&year_2024(), date(2024, 12, 31));

        assert_eq!(result.status, WithdrawalStatus::Expired);
    }

    #[test]
    fn should_be_expired_after_the_expiry_date() {
        let result = calculate(&year_2024(), date(2025, 1, 1));

        assert_eq!(result.status, WithdrawalStatus::Expired);
        assert_eq!(result.remaining_days, -74);
    }

    #[test]
    fn should_round_window_half_up() {
        let rule = WithdrawalRule::standard();

        assert_eq!(withdrawal_window_days(1, &rule), 0);
        assert_eq!(withdrawal_window_days(3, &rule), 1);
        assert_eq!(withdrawal_window_days(7, &rule), 1);
        assert_eq!(withdrawal_window_days(8, &rule), 2);
        assert_eq!(withdrawal_window_days(10, &rule), 2);
    }

    #[test]
    fn should_round_exact_halves_up_for_other_percentages() {
        let rule = WithdrawalRule::with_percentage(25);

        // 10 * 25% = 2.5
        assert_eq!(withdrawal_window_days(10, &rule), 3);
    }

    #[test]
    fn should_keep_pull_date_on_expiry_for_one_day_shelf_life() {
        let dates = validate("2024-06-01", "2024-06-02").unwrap();

        let result = calculate(&dates, date(2024, 6, 1));

        assert_eq!(result.total_days, 1);
        assert_eq!(result.pull_date, date(2024, 6, 2));
        assert_eq!(result.status, WithdrawalStatus::Safe);
    }

    #[test]
    fn should_record_calculation_date() {
        let today = date(2024, 5, 5);

        let result = calculate(&year_2024(), today);

        assert_eq!(result.calculated_on, today);
        assert_eq!(result.manufacture_date, date(2024, 1, 1));
        assert_eq!(result.expiry_date, date(2024, 12, 31));
    }

    fn ordered_dates() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
        (0i64..40_000, 1i64..5_000).prop_map(|(start, span)| {
            let manufacture = date(1970, 1, 1) + Duration::days(start);
            (manufacture, manufacture + Duration::days(span))
        })
    }

    fn validated(manufacture: NaiveDate, expiry: NaiveDate) -> ValidatedDates {
        validate(
            &manufacture.format("%Y-%m-%d").to_string(),
            &expiry.format("%Y-%m-%d").to_string(),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn should_never_place_pull_date_after_expiry(
            (manufacture, expiry) in ordered_dates(),
            offset in -10_000i64..10_000,
        ) {
            let today = manufacture + Duration::days(offset);
            let result = calculate(&validated(manufacture, expiry), today);

            prop_assert!(result.pull_date <= result.expiry_date);
            prop_assert!(result.pull_date >= result.manufacture_date);
            prop_assert_eq!(result.total_days, (expiry - manufacture).num_days());
            prop_assert!(result.total_days > 0);
        }

        #[test]
        fn should_be_idempotent_for_the_same_today(
            (manufacture, expiry) in ordered_dates(),
            offset in -10_000i64..10_000,
        ) {
            let dates = validated(manufacture, expiry);
            let today = manufacture + Duration::days(offset);

            prop_assert_eq!(calculate(&dates, today), calculate(&dates, today));
        }

        #[test]
        fn should_never_downgrade_status_as_days_pass(
            (manufacture, expiry) in ordered_dates(),
            offset in -100i64..6_000,
            step in 1i64..500,
        ) {
            let dates = validated(manufacture, expiry);
            let earlier = manufacture + Duration::days(offset);
            let later = earlier + Duration::days(step);

            prop_assert!(calculate(&dates, earlier).status <= calculate(&dates, later).status);
        }
    }
}
