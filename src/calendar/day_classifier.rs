//! Rest-day and work-day classification.
//!
//! This module decides, for any date, whether it is a rest day or a work day
//! once the override table has been applied. An override always wins; dates
//! without one follow the Saturday/Sunday pattern.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::OverrideRecord;

/// Lookup from date to override record, built once per query.
///
/// When the input contains the same date twice, the first record wins.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::OverrideIndex;
/// use holiday_engine::models::OverrideRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let records = vec![OverrideRecord::off_day(date, "New Year")];
/// let index = OverrideIndex::new(&records);
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.get(date).map(|r| r.label.as_str()), Some("New Year"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideIndex<'a> {
    by_date: HashMap<NaiveDate, &'a OverrideRecord>,
}

impl<'a> OverrideIndex<'a> {
    /// Builds the index from an override list.
    pub fn new(records: &'a [OverrideRecord]) -> Self {
        let mut by_date = HashMap::with_capacity(records.len());
        for record in records {
            by_date.entry(record.date).or_insert(record);
        }
        Self { by_date }
    }

    /// Returns the override for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&'a OverrideRecord> {
        self.by_date.get(&date).copied()
    }

    /// Number of distinct overridden dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns `true` if no date is overridden.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Returns `true` if `date` is a Saturday or Sunday, ignoring overrides.
pub fn is_natural_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines whether `date` is a rest day.
///
/// # Arguments
///
/// * `date` - The date to classify
/// * `index` - The override index for the query
///
/// # Returns
///
/// The override's `is_off_day` flag when `date` is overridden, otherwise
/// `true` for Saturday and Sunday.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{is_rest_day, OverrideIndex};
/// use holiday_engine::models::OverrideRecord;
/// use chrono::NaiveDate;
///
/// // 2026-01-01 is a Thursday, 2026-01-04 a Sunday
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let make_up = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// let records = vec![
///     OverrideRecord::off_day(new_year, "New Year"),
///     OverrideRecord::work_day(make_up, "New Year"),
/// ];
/// let index = OverrideIndex::new(&records);
///
/// assert!(is_rest_day(new_year, &index));
/// assert!(!is_rest_day(make_up, &index));
///
/// // 2026-01-10 is an ordinary Saturday
/// assert!(is_rest_day(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(), &index));
/// ```
pub fn is_rest_day(date: NaiveDate, index: &OverrideIndex<'_>) -> bool {
    match index.get(date) {
        Some(record) => record.is_off_day,
        None => is_natural_weekend(date),
    }
}

/// Determines whether `date` is a work day. The negation of [`is_rest_day`].
pub fn is_work_day(date: NaiveDate, index: &OverrideIndex<'_>) -> bool {
    !is_rest_day(date, index)
}
