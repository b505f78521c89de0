use chrono::NaiveDate;

/// Source of the calendar date a calculation is made against.
///
/// The calculator never reads the wall clock itself; callers ask a `Clock`
/// for "today" and pass it in, which keeps the domain pure and testable.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
