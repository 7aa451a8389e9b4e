//! # Clock
//!
//! Source of "today" for date stamping. The reconciler never reads the
//! system time directly, so tests can pin the date with [`FixedClock`].

use chrono::{Local, NaiveDate};

/// Long month name, day without padding, four digit year: "June 1, 2024".
pub const DATE_FORMAT: &str = "%B %-d, %Y";

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Today's date rendered the way timeline items display it.
    fn today_label(&self) -> String {
        format_date(self.today())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Wall clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
