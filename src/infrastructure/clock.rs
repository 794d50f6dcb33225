use chrono::{Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock reading the local calendar date of the host.
#[derive(Debug, Default)]
pub struct OsClock {}

impl OsClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for OsClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
