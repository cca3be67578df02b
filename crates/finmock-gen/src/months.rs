//! Calendar month window helpers.
//!
//! The window is computed once per run: the current month and the months
//! preceding it, each represented as its first-of-month date.

use chrono::{Datelike, NaiveDate};

/// First-of-month dates for `len` months ending at the month of `today`,
/// newest first.
pub fn month_window(today: NaiveDate, len: usize) -> Vec<NaiveDate> {
    let mut months = Vec::with_capacity(len);
    let mut year = today.year();
    let mut month = today.month();
    for _ in 0..len {
        months.push(
            NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is always valid"),
        );
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    months
}

/// "YYYY-MM" label for a first-of-month date.
pub fn month_label(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
