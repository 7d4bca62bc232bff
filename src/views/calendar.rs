//! Calendar month grid
//!
//! Builds the day grid backing the calendar view: full weeks from the
//! Sunday on or before the 1st through the Saturday on or after the
//! last day of the month.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::event::Event;
use crate::utils::errors::{EventFlowError, Result};

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days padding out the first and
    /// last week
    pub in_month: bool,
}

/// Build the grid for one month
pub fn month_grid(year: i32, month: u32) -> Result<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        EventFlowError::Validation(format!("Invalid calendar month: {}-{}", year, month))
    })?;
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| {
        EventFlowError::Validation(format!("Invalid calendar month: {}-{}", year, month))
    })?;
    let last = first_of_next.pred_opt().ok_or_else(|| {
        EventFlowError::Validation(format!("Invalid calendar month: {}-{}", year, month))
    })?;

    let start = first - Days::new(u64::from(first.weekday().num_days_from_sunday()));
    let end = last + Days::new(u64::from(6 - last.weekday().num_days_from_sunday()));

    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(CalendarDay {
            date: current,
            in_month: current.month() == month,
        });
        current = current + Days::new(1);
    }

    Ok(days)
}

/// Events starting on the given day
pub fn events_on(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| e.start_date_time.date_naive() == date)
        .collect()
}
