use crate::domain::model::Record;
use chrono::{Datelike, NaiveDate};

/// Whole years between `born` and `today`, one less if this year's birthday is still ahead.
pub fn calculate_age(born: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (born.month(), born.day());
    today.year() - born.year() - i32::from(birthday_pending)
}

/// Mean age over the collection; `0.0` when there is nothing to average.
pub fn average_age(records: &[Record], today: NaiveDate) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let total: i64 = records
        .iter()
        .map(|r| i64::from(calculate_age(r.date_of_birth, today)))
        .sum();
    total as f64 / records.len() as f64
}
