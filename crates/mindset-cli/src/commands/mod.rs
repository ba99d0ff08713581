pub mod config;
pub mod serve;
pub mod shell;
pub mod show;
pub mod streak;

use chrono::{Local, NaiveDate};

/// `--today` override, or the local calendar date.
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match today {
        Some(value) => Ok(mindset_core::parse_date(value)?),
        None => Ok(Local::now().date_naive()),
    }
}
