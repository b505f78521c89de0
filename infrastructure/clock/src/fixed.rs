use business::domain::clock::Clock;
use business::domain::withdrawal::validator::parse_date;
use chrono::NaiveDate;

/// Always answers the same date. Used to pin "today" for demos and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("clock.invalid_date: expected YYYY-MM-DD, got {0:?}")]
pub struct InvalidFixedDate(pub String);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidFixedDate> {
        parse_date(raw)
            .map(Self)
            .ok_or_else(|| InvalidFixedDate(raw.to_string()))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
