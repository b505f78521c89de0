use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select};

use business::domain::clock::Clock;
use business::domain::shared::locale::Locale;
use business::domain::withdrawal::form::{FormField, FormState};
use business::domain::withdrawal::rule::WithdrawalRule;

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditManufactureDate,
    EditExpiryDate,
    Calculate,
    Reset,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::EditManufactureDate,
        Action::EditExpiryDate,
        Action::Calculate,
        Action::Reset,
        Action::Quit,
    ];

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Action::EditManufactureDate, Locale::En) => "Set manufacture date",
            (Action::EditExpiryDate, Locale::En) => "Set expiry date",
            (Action::Calculate, Locale::En) => "Calculate",
            (Action::Reset, Locale::En) => "Reset",
            (Action::Quit, Locale::En) => "Quit",
            (Action::EditManufactureDate, Locale::Vi) => "Nhập Ngày Sản Xuất",
            (Action::EditExpiryDate, Locale::Vi) => "Nhập Hạn Sử Dụng",
            (Action::Calculate, Locale::Vi) => "Tính kết quả",
            (Action::Reset, Locale::Vi) => "Nhập lại",
            (Action::Quit, Locale::Vi) => "Thoát",
        }
    }
}

/// Picks the action highlighted by default: the next empty field, then Calculate.
fn suggested_action(state: &FormState) -> Action {
    if state.input().manufacture_date.trim().is_empty() {
        Action::EditManufactureDate
    } else if state.input().expiry_date.trim().is_empty() {
        Action::EditExpiryDate
    } else {
        Action::Calculate
    }
}

fn prompt_date(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Runs the form loop until the user quits.
pub fn run(clock: Arc<dyn Clock>, locale: Locale) -> Result<()> {
    println!("{}\n", render::rule(&WithdrawalRule::standard(), locale).dimmed());

    let items: Vec<&str> = Action::ALL.iter().map(|a| a.label(locale)).collect();
    let mut state = FormState::default();

    loop {
        println!("{}\n", render::form(&state, locale));

        let default = Action::ALL
            .iter()
            .position(|a| *a == suggested_action(&state))
            .unwrap_or_default();
        let selection = Select::new().items(&items).default(default).interact()?;

        state = match Action::ALL[selection] {
            Action::EditManufactureDate => {
                let value = prompt_date(
                    Action::EditManufactureDate.label(locale),
                    &state.input().manufacture_date,
                )?;
                state.with_field(FormField::ManufactureDate, value)
            }
            Action::EditExpiryDate => {
                let value = prompt_date(
                    Action::EditExpiryDate.label(locale),
                    &state.input().expiry_date,
                )?;
                state.with_field(FormField::ExpiryDate, value)
            }
            Action::Calculate => {
                let next = state.submit(clock.today());
                if let Some(err) = next.error() {
                    tracing::debug!(code = err.code(), "Submission rejected");
                }
                next
            }
            Action::Reset => state.reset(),
            Action::Quit => break,
        };
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_suggest_first_empty_field() {
        let state = FormState::default();

        assert_eq!(suggested_action(&state), Action::EditManufactureDate);

        let state = state.with_field(FormField::ManufactureDate, "2024-01-01");
        assert_eq!(suggested_action(&state), Action::EditExpiryDate);
    }

    #[test]
    fn should_suggest_calculate_when_both_fields_filled() {
        let state = FormState::default()
            .with_field(FormField::ManufactureDate, "2024-01-01")
            .with_field(FormField::ExpiryDate, "2024-12-31")
            .submit(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        assert_eq!(suggested_action(&state), Action::Calculate);
    }

    #[test]
    fn should_label_every_action_in_both_languages() {
        for action in Action::ALL {
            assert!(!action.label(Locale::En).is_empty());
            assert!(!action.label(Locale::Vi).is_empty());
        }
    }
}
