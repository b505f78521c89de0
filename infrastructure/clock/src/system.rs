use business::domain::clock::Clock;
use chrono::{Local, NaiveDate, Utc};

/// Which calendar "today" is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalendarTimezone {
    /// The host's local calendar date.
    #[default]
    Local,
    Utc,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("clock.invalid_timezone: {0}")]
pub struct InvalidTimezone(pub String);

impl std::fmt::Display for CalendarTimezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarTimezone::Local => write!(f, "local"),
            CalendarTimezone::Utc => write!(f, "utc"),
        }
    }
}

impl std::str::FromStr for CalendarTimezone {
    type Err = InvalidTimezone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(CalendarTimezone::Local),
            "utc" => Ok(CalendarTimezone::Utc),
            _ => Err(InvalidTimezone(s.to_string())),
        }
    }
}

/// Reads today's date from the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: CalendarTimezone,
}

impl SystemClock {
    pub fn new(timezone: CalendarTimezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.timezone {
            CalendarTimezone::Local => Local::now().date_naive(),
            CalendarTimezone::Utc => Utc::now().date_naive(),
        }
    }
}
