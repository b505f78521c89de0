use std::env;
use std::sync::Arc;

use anyhow::Context;
use business::domain::clock::Clock;
use clock::{CalendarTimezone, build_clock};

/// Where the API reads "today" from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub timezone: CalendarTimezone,
    pub calculation_date: Option<String>,
}

impl ClockConfig {
    /// Load clock configuration from environment variables
    ///
    /// Environment variables:
    /// - CALENDAR_TIMEZONE: "local" or "utc" (default: "local")
    /// - CALCULATION_DATE: YYYY-MM-DD date that pins "today" (default: unset)
    pub fn from_env() -> anyhow::Result<Self> {
        let timezone = match env::var("CALENDAR_TIMEZONE") {
            Ok(raw) => raw
                .parse::<CalendarTimezone>()
                .with_context(|| format!("CALENDAR_TIMEZONE has an invalid value: {raw}"))?,
            Err(_) => CalendarTimezone::default(),
        };
        let calculation_date = env::var("CALCULATION_DATE")
            .ok()
            .filter(|value| !value.trim().is_empty());

        Ok(Self {
            timezone,
            calculation_date,
        })
    }

    pub fn build(&self) -> anyhow::Result<Arc<dyn Clock>> {
        build_clock(self.calculation_date.as_deref(), self.timezone)
            .context("CALCULATION_DATE must be formatted as YYYY-MM-DD")
    }
}
