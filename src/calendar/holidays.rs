//! Holiday queries: remaining holidays this year and the nearest holiday.

use chrono::{Datelike, NaiveDate};

use crate::models::{NearestHolidayResult, OverrideRecord, RemainingHolidaysResult, WindowStatus};

use super::{HolidaySegment, TodayBoundary, build_future_segments};

/// Lists the holiday windows left in `today`'s calendar year.
///
/// Off-days from a merged following-year table are not counted. A window
/// that runs across New Year's Eve keeps only its in-year dates, since the
/// year filter is applied before segmentation.
///
/// # Arguments
///
/// * `records` - The override list (may include next year's records)
/// * `today` - The query date
/// * `boundary` - Whether an off-day dated `today` still counts
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{remaining_holiday, TodayBoundary};
/// use holiday_engine::models::OverrideRecord;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let records = vec![
///     OverrideRecord::off_day(d("2026-10-01"), "National Day"),
///     OverrideRecord::off_day(d("2026-10-02"), "National Day"),
///     OverrideRecord::off_day(d("2027-01-01"), "New Year"),
/// ];
///
/// let result = remaining_holiday(&records, d("2026-09-01"), TodayBoundary::Inclusive);
/// assert_eq!(result.total_remaining_days, 2);
/// assert_eq!(result.segments.len(), 1);
/// ```
pub fn remaining_holiday(
    records: &[OverrideRecord],
    today: NaiveDate,
    boundary: TodayBoundary,
) -> RemainingHolidaysResult {
    let this_year: Vec<_> = records
        .iter()
        .filter(|r| r.date.year() == today.year())
        .cloned()
        .collect();

    let segments = build_future_segments(&this_year, today, boundary);
    let total_remaining_days = segments.iter().map(HolidaySegment::days).sum();

    RemainingHolidaysResult {
        total_remaining_days,
        segments: segments.iter().map(HolidaySegment::to_summary).collect(),
    }
}

/// Finds the holiday window in progress, or the next one to start.
///
/// Segments are built with [`TodayBoundary::Inclusive`] so that a window
/// containing today is seen as ongoing.
///
/// # Returns
///
/// * `Some` with [`WindowStatus::Ongoing`] and `days_left = end_date - today`
///   when today falls inside a window
/// * `Some` with [`WindowStatus::Upcoming`] and `days_left = start_date - today`
///   for the earliest future window otherwise
/// * `None` when the table holds no future off-days
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::nearest_holiday;
/// use holiday_engine::models::{OverrideRecord, WindowStatus};
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let records = vec![
///     OverrideRecord::off_day(d("2026-01-01"), "New Year"),
///     OverrideRecord::off_day(d("2026-01-02"), "New Year"),
///     OverrideRecord::off_day(d("2026-01-03"), "New Year"),
/// ];
///
/// let result = nearest_holiday(&records, d("2025-12-30")).unwrap();
/// assert_eq!(result.status, WindowStatus::Upcoming);
/// assert_eq!(result.label, "New Year");
/// assert_eq!(result.days, 3);
/// assert_eq!(result.days_left, 2);
/// ```
pub fn nearest_holiday(
    records: &[OverrideRecord],
    today: NaiveDate,
) -> Option<NearestHolidayResult> {
    let segments = build_future_segments(records, today, TodayBoundary::Inclusive);

    if let Some(ongoing) = segments.iter().find(|s| s.contains(today)) {
        return Some(window_result(
            ongoing,
            WindowStatus::Ongoing,
            (ongoing.end_date - today).num_days(),
        ));
    }

    let next = segments.first()?;
    Some(window_result(
        next,
        WindowStatus::Upcoming,
        (next.start_date - today).num_days(),
    ))
}

fn window_result(
    segment: &HolidaySegment,
    status: WindowStatus,
    days_left: i64,
) -> NearestHolidayResult {
    NearestHolidayResult {
        status,
        label: segment.label.clone(),
        start_date: segment.start_date,
        end_date: segment.end_date,
        days: segment.days(),
        days_left,
    }
}
