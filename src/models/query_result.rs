//! Query result models for the Holiday Query Engine.
//!
//! Every result is built fresh for one query and handed back to the caller,
//! which serializes it. Field names on the wire are camelCase and labels go
//! out as `name`. Dates serialize as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Name reported for every weekend window.
pub const WEEKEND_NAME: &str = "周末";

/// Name reported for every payday.
pub const PAYDAY_NAME: &str = "发薪日";

/// Whether a window contains today or lies entirely in the future.
///
/// # Example
///
/// ```
/// use holiday_engine::models::WindowStatus;
///
/// assert_eq!(serde_json::to_string(&WindowStatus::Ongoing).unwrap(), "\"ongoing\"");
/// assert_eq!(WindowStatus::Upcoming.to_string(), "upcoming");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStatus {
    /// Today falls inside the window.
    Ongoing,
    /// The window starts after today.
    Upcoming,
}

impl std::fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowStatus::Ongoing => write!(f, "ongoing"),
            WindowStatus::Upcoming => write!(f, "upcoming"),
        }
    }
}

/// One holiday window in a [`RemainingHolidaysResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySummary {
    /// The resolved label of the window.
    #[serde(rename = "name")]
    pub label: String,
    /// Every date in the window, ascending.
    pub dates: Vec<NaiveDate>,
    /// Number of dates in the window.
    pub days: usize,
}

/// The holidays left in the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingHolidaysResult {
    /// Sum of `days` over all segments.
    #[serde(rename = "remainHolidays")]
    pub total_remaining_days: usize,
    /// The remaining windows, in date order.
    #[serde(rename = "holidays")]
    pub segments: Vec<HolidaySummary>,
}

/// The holiday window that is in progress, or the next one to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestHolidayResult {
    /// Ongoing or upcoming.
    pub status: WindowStatus,
    /// The resolved label of the window.
    #[serde(rename = "name")]
    pub label: String,
    /// First day of the window.
    pub start_date: NaiveDate,
    /// Last day of the window.
    pub end_date: NaiveDate,
    /// Length of the window in days.
    pub days: usize,
    /// Days until the window ends (ongoing) or starts (upcoming).
    pub days_left: i64,
}

/// The weekend that is in progress, or the next one to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendResult {
    /// Ongoing or upcoming.
    pub status: WindowStatus,
    /// Always [`WEEKEND_NAME`].
    pub name: String,
    /// First qualifying day.
    pub start_date: NaiveDate,
    /// Last qualifying day.
    pub end_date: NaiveDate,
    /// Length of the window in days (1 or 2).
    pub days: usize,
    /// Days until the window ends (ongoing) or starts (upcoming), never negative.
    pub days_left: i64,
}

/// The resolved payday.
///
/// # Example
///
/// ```
/// use holiday_engine::models::{PAYDAY_NAME, PaydayResult};
/// use chrono::NaiveDate;
///
/// let result = PaydayResult {
///     name: PAYDAY_NAME.to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     days_left: 44,
/// };
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["name"], "发薪日");
/// assert_eq!(json["date"], "2026-03-31");
/// assert_eq!(json["daysLeft"], 44);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaydayResult {
    /// Always [`PAYDAY_NAME`].
    pub name: String,
    /// The payday.
    pub date: NaiveDate,
    /// Whole days from today until the payday, never negative.
    pub days_left: i64,
}
