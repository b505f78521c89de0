use std::sync::Arc;

use business::domain::clock::Clock;

mod fixed;
mod system;

pub use fixed::{FixedClock, InvalidFixedDate};
pub use system::{CalendarTimezone, InvalidTimezone, SystemClock};

/// Picks the clock for a run: a pinned date when one is given, otherwise the wall clock.
pub fn build_clock(
    calculation_date: Option<&str>,
    timezone: CalendarTimezone,
) -> Result<Arc<dyn Clock>, InvalidFixedDate> {
    match calculation_date {
        Some(raw) => Ok(Arc::new(FixedClock::parse(raw)?)),
        None => Ok(Arc::new(SystemClock::new(timezone))),
    }
}
