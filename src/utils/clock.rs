use chrono::{Local, NaiveDate};

/// Represents an entity responsible for providing dates across application. This allows the
/// "yesterday" report window to be pinned during testing.
pub trait Clock: Sync + Send + 'static {
    fn today(&self) -> NaiveDate;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock stuck on a single day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
