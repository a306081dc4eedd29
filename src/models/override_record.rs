//! Override table models.
//!
//! This module contains the [`OverrideRecord`] and [`OverrideYear`] types that
//! describe which dates deviate from the natural Saturday/Sunday pattern.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single overridden calendar date.
///
/// `is_off_day = true` forces a rest day (a public holiday, even on a
/// weekday). `is_off_day = false` forces a work day (a make-up working
/// Saturday or Sunday). Dates without a record follow the weekday pattern.
///
/// The JSON shape follows the published holiday tables, where the label is
/// called `name` and the flag is `isOffDay`.
///
/// # Example
///
/// ```
/// use holiday_engine::models::OverrideRecord;
/// use chrono::NaiveDate;
///
/// let record: OverrideRecord = serde_json::from_str(
///     r#"{"name": "New Year", "date": "2026-01-01", "isOffDay": true}"#,
/// ).unwrap();
///
/// assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(record.label, "New Year");
/// assert!(record.is_off_day);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRecord {
    /// The overridden date.
    pub date: NaiveDate,
    /// The holiday label (e.g. "National Day").
    #[serde(alias = "name")]
    pub label: String,
    /// Whether the date is a rest day.
    #[serde(rename = "isOffDay", alias = "is_off_day")]
    pub is_off_day: bool,
}

impl OverrideRecord {
    /// Creates a forced rest day.
    pub fn off_day(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
            is_off_day: true,
        }
    }

    /// Creates a forced work day.
    pub fn work_day(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
            is_off_day: false,
        }
    }
}

/// One year's override table as published.
///
/// # Example
///
/// ```
/// use holiday_engine::models::OverrideYear;
///
/// let year: OverrideYear = serde_json::from_str(r#"{
///     "year": 2026,
///     "days": [
///         {"name": "New Year", "date": "2026-01-01", "isOffDay": true},
///         {"name": "New Year", "date": "2026-01-04", "isOffDay": false}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(year.year, 2026);
/// assert_eq!(year.days.len(), 2);
/// assert_eq!(year.off_days().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideYear {
    /// The calendar year this table was published for.
    pub year: i32,
    /// The overridden dates, in publication order.
    #[serde(default)]
    pub days: Vec<OverrideRecord>,
}

impl OverrideYear {
    /// Returns the records that force a rest day.
    pub fn off_days(&self) -> impl Iterator<Item = &OverrideRecord> {
        self.days.iter().filter(|d| d.is_off_day)
    }

    /// Returns `true` if every record's date falls inside `self.year`.
    ///
    /// Published tables occasionally carry a make-up work day from the
    /// neighbouring year, so this is informational rather than enforced.
    pub fn is_year_scoped(&self) -> bool {
        self.days.iter().all(|d| d.date.year() == self.year)
    }
}
