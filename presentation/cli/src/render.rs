//! Text rendering for the terminal front end.
//!
//! Functions here return strings so the interactive loop and the one-shot
//! command share one layout.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use business::domain::shared::locale::Locale;
use business::domain::withdrawal::errors::ValidationError;
use business::domain::withdrawal::form::FormState;
use business::domain::withdrawal::model::CalculationResult;
use business::domain::withdrawal::rule::WithdrawalRule;
use business::domain::withdrawal::value_objects::WithdrawalStatus;

struct Labels {
    manufacture_date: &'static str,
    expiry_date: &'static str,
    total_days: &'static str,
    pull_date: &'static str,
    remaining_days: &'static str,
    status: &'static str,
    calculated_on: &'static str,
    days: &'static str,
    unset: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::En => Labels {
            manufacture_date: "Manufacture date (NSX)",
            expiry_date: "Expiry date (HSD)",
            total_days: "Total shelf life",
            pull_date: "Pull date",
            remaining_days: "Days until pull date",
            status: "Status",
            calculated_on: "As of",
            days: "days",
            unset: "(not set)",
        },
        Locale::Vi => Labels {
            manufacture_date: "Ngày Sản Xuất (NSX)",
            expiry_date: "Hạn Sử Dụng (HSD)",
            total_days: "Tổng thời hạn",
            pull_date: "Ngày lùi hàng",
            remaining_days: "Số ngày còn lại",
            status: "Trạng thái",
            calculated_on: "Tính đến",
            days: "ngày",
            unset: "(chưa nhập)",
        },
    }
}

pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%Y-%m-%d").to_string(),
        Locale::Vi => date.format("%d/%m/%Y").to_string(),
    }
}

pub fn status_badge(status: WithdrawalStatus, locale: Locale) -> ColoredString {
    let label = status.label(locale);
    match status {
        WithdrawalStatus::Safe => label.green().bold(),
        WithdrawalStatus::Warning => label.yellow().bold(),
        WithdrawalStatus::Expired => label.red().bold(),
    }
}

pub fn result(result: &CalculationResult, locale: Locale) -> String {
    let l = labels(locale);
    let remaining = if result.remaining_days > 0 {
        result.remaining_days.to_string().normal()
    } else {
        result.remaining_days.to_string().red()
    };

    [
        format!("{:<24} {} {}", l.total_days, result.total_days, l.days),
        format!(
            "{:<24} {}",
            l.pull_date,
            format_date(result.pull_date, locale).bold()
        ),
        format!("{:<24} {} {}", l.remaining_days, remaining, l.days),
        format!("{:<24} {}", l.status, status_badge(result.status, locale)),
        format!(
            "{:<24} {}",
            l.calculated_on,
            format_date(result.calculated_on, locale).dimmed()
        ),
    ]
    .join("\n")
}

pub fn error(error: &ValidationError, locale: Locale) -> String {
    format!("{} {}", "✗".red(), error.localized(locale).red())
}

pub fn rule(rule: &WithdrawalRule, locale: Locale) -> String {
    format!("{}\n{}", rule.describe(locale), rule.formula(locale).bold())
}

pub fn form(state: &FormState, locale: Locale) -> String {
    let l = labels(locale);
    let field = |value: &str| {
        if value.trim().is_empty() {
            l.unset.dimmed().to_string()
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        format!(
            "{:<24} {}",
            l.manufacture_date,
            field(&state.input().manufacture_date)
        ),
        format!("{:<24} {}", l.expiry_date, field(&state.input().expiry_date)),
    ];

    if let Some(err) = state.error() {
        lines.push(String::new());
        lines.push(error(err, locale));
    }

    if let Some(calculated) = state.result() {
        lines.push(String::new());
        lines.push(result(calculated, locale));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::withdrawal::form::FormField;

    fn plain() {
        colored::control::set_override(false);
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 20).unwrap()
    }

    #[test]
    fn should_format_dates_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();

        assert_eq!(format_date(date, Locale::En), "2024-10-19");
        assert_eq!(format_date(date, Locale::Vi), "19/10/2024");
    }

    #[test]
    fn should_render_result_lines() {
        plain();
        let state = FormState::default()
            .with_field(FormField::ManufactureDate, "2024-01-01")
            .with_field(FormField::ExpiryDate, "2024-12-31")
            .submit(today());

        let text = result(state.result().unwrap(), Locale::En);

        assert!(text.contains("365 days"));
        assert!(text.contains("2024-10-19"));
        assert!(text.contains("-1 days"));
        assert!(text.contains("Pull from sale"));
    }

    #[test]
    fn should_render_unset_fields_and_error() {
        plain();
        let state = FormState::default().submit(today());

        let text = form(&state, Locale::Vi);

        assert!(text.contains("(chưa nhập)"));
        assert!(text.contains("Vui lòng nhập đầy đủ Ngày Sản Xuất và Hạn Sử Dụng."));
    }

    #[test]
    fn should_render_rule_guide() {
        plain();

        let text = rule(&WithdrawalRule::standard(), Locale::En);

        assert!(text.contains("Pull date = Expiry date - (Total days x 20%)"));
    }
}
