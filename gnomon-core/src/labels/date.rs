//! Date label formatting

use core::fmt::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use heapless::String;

/// Buffer size for the date label
pub const DATE_LEN: usize = 8;

/// Format a date as weekday abbreviation plus zero-padded day, "Sat 03"
pub fn format_date(date: NaiveDate) -> String<DATE_LEN> {
    let mut out = String::new();
    let _ = write!(out, "{} {:02}", abbrev(date.weekday()), date.day());
    out
}

fn abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
