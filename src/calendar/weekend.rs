//! Nearest weekend lookup.
//!
//! A weekend day only counts if the override table leaves it a rest day: a
//! make-up working Saturday is not part of any weekend.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{OverrideRecord, WEEKEND_NAME, WeekendResult, WindowStatus};

use super::{OverrideIndex, is_natural_weekend, is_rest_day};

/// Default number of days scanned before giving up.
pub const DEFAULT_WEEKEND_HORIZON_DAYS: u32 = 120;

/// Longest stretch a window can grow past its first day (Saturday + Sunday).
const MAX_EXTENSION_DAYS: u64 = 2;

fn qualifies(date: NaiveDate, index: &OverrideIndex<'_>) -> bool {
    is_natural_weekend(date) && is_rest_day(date, index)
}

/// Finds the weekend in progress, or the next one to start.
///
/// # Arguments
///
/// * `records` - The override list
/// * `today` - The query date
/// * `horizon_days` - How many days past today to scan (inclusive)
///
/// # Returns
///
/// A [`WeekendResult`] whose window starts at the first qualifying day at or
/// after `today` and extends over directly following qualifying days. The
/// status is [`WindowStatus::Ongoing`] when today itself qualifies.
///
/// # Errors
///
/// [`EngineError::NoCandidateFound`] when no qualifying day exists within
/// the horizon.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{nearest_weekend, DEFAULT_WEEKEND_HORIZON_DAYS};
/// use holiday_engine::models::{OverrideRecord, WindowStatus};
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// // Saturday 2026-10-10 is a make-up work day
/// let records = vec![OverrideRecord::work_day(d("2026-10-10"), "National Day")];
///
/// let result = nearest_weekend(&records, d("2026-10-08"), DEFAULT_WEEKEND_HORIZON_DAYS).unwrap();
/// assert_eq!(result.status, WindowStatus::Upcoming);
/// assert_eq!(result.start_date, d("2026-10-11"));
/// assert_eq!(result.end_date, d("2026-10-11"));
/// assert_eq!(result.days, 1);
/// assert_eq!(result.days_left, 3);
/// ```
pub fn nearest_weekend(
    records: &[OverrideRecord],
    today: NaiveDate,
    horizon_days: u32,
) -> EngineResult<WeekendResult> {
    let index = OverrideIndex::new(records);

    let start_date = (0..=u64::from(horizon_days))
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .find(|&date| qualifies(date, &index))
        .ok_or_else(|| EngineError::NoCandidateFound {
            search: "weekend".to_string(),
            limit: horizon_days,
        })?;

    let mut end_date = start_date;
    for offset in 1..=MAX_EXTENSION_DAYS {
        match start_date.checked_add_days(Days::new(offset)) {
            Some(next) if qualifies(next, &index) => end_date = next,
            _ => break,
        }
    }

    let status = if qualifies(today, &index) {
        WindowStatus::Ongoing
    } else {
        WindowStatus::Upcoming
    };

    let days_left = match status {
        WindowStatus::Ongoing => (end_date - today).num_days(),
        WindowStatus::Upcoming => (start_date - today).num_days(),
    }
    .max(0);

    debug!(%today, %start_date, %end_date, %status, "Resolved nearest weekend");

    Ok(WeekendResult {
        status,
        name: WEEKEND_NAME.to_string(),
        start_date,
        end_date,
        days: ((end_date - start_date).num_days() + 1) as usize,
        days_left,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weekend(records: &[OverrideRecord], today: &str) -> WeekendResult {
        nearest_weekend(records, make_date(today), DEFAULT_WEEKEND_HORIZON_DAYS).unwrap()
    }

    // ==========================================================================
    // Natural weekends
    // ==========================================================================

    #[test]
    fn test_upcoming_from_weekday() {
        // Friday 2026-10-16
        let result = weekend(&[], "2026-10-16");

        assert_eq!(result.status, WindowStatus::Upcoming);
        assert_eq!(result.name, WEEKEND_NAME);
        assert_eq!(result.start_date, make_date("2026-10-17"));
        assert_eq!(result.end_date, make_date("2026-10-18"));
        assert_eq!(result.days, 2);
        assert_eq!(result.days_left, 1);
    }

    #[test]
    fn test_ongoing_on_saturday() {
        let result = weekend(&[], "2026-10-17");

        assert_eq!(result.status, WindowStatus::Ongoing);
        assert_eq!(result.start_date, make_date("2026-10-17"));
        assert_eq!(result.end_date, make_date("2026-10-18"));
        assert_eq!(result.days_left, 1);
    }

    #[test]
    fn test_ongoing_on_sunday_is_single_day() {
        let result = weekend(&[], "2026-10-18");

        assert_eq!(result.status, WindowStatus::Ongoing);
        assert_eq!(result.start_date, make_date("2026-10-18"));
        assert_eq!(result.end_date, make_date("2026-10-18"));
        assert_eq!(result.days, 1);
        assert_eq!(result.days_left, 0);
    }

    #[test]
    fn test_monday_looks_ahead_five_days() {
        let result = weekend(&[], "2026-10-12");
        assert_eq!(result.start_date, make_date("2026-10-17"));
        assert_eq!(result.days_left, 5);
    }

    // ==========================================================================
    // Override shrinkage
    // ==========================================================================

    #[test]
    fn test_working_saturday_shrinks_to_sunday() {
        let records = vec![OverrideRecord::work_day(make_date("2026-10-10"), "National Day")];
        let result = weekend(&records, "2026-10-08");

        assert_eq!(result.start_date, make_date("2026-10-11"));
        assert_eq!(result.end_date, make_date("2026-10-11"));
        assert_eq!(result.days, 1);
    }

    #[test]
    fn test_working_sunday_shrinks_to_saturday() {
        let records = vec![OverrideRecord::work_day(make_date("2026-09-20"), "National Day")];
        // Thursday 2026-09-17
        let result = weekend(&records, "2026-09-17");

        assert_eq!(result.start_date, make_date("2026-09-19"));
        assert_eq!(result.end_date, make_date("2026-09-19"));
        assert_eq!(result.days, 1);
    }

    #[test]
    fn test_both_days_worked_skips_to_next_week() {
        let records = vec![
            OverrideRecord::work_day(make_date("2026-10-17"), "Make-up"),
            OverrideRecord::work_day(make_date("2026-10-18"), "Make-up"),
        ];
        let result = weekend(&records, "2026-10-16");

        assert_eq!(result.status, WindowStatus::Upcoming);
        assert_eq!(result.start_date, make_date("2026-10-24"));
        assert_eq!(result.end_date, make_date("2026-10-25"));
        assert_eq!(result.days_left, 8);
    }

    #[test]
    fn test_working_saturday_today_is_upcoming() {
        let records = vec![OverrideRecord::work_day(make_date("2026-10-10"), "National Day")];
        let result = weekend(&records, "2026-10-10");

        assert_eq!(result.status, WindowStatus::Upcoming);
        assert_eq!(result.start_date, make_date("2026-10-11"));
        assert_eq!(result.days_left, 1);
    }

    #[test]
    fn test_weekday_holiday_does_not_extend_weekend() {
        // Friday 2026-10-02 off and Monday 2026-10-05 off do not qualify
        let records = vec![
            OverrideRecord::off_day(make_date("2026-10-02"), "National Day"),
            OverrideRecord::off_day(make_date("2026-10-05"), "National Day"),
        ];
        let result = weekend(&records, "2026-10-02");

        assert_eq!(result.status, WindowStatus::Upcoming);
        assert_eq!(result.start_date, make_date("2026-10-03"));
        assert_eq!(result.end_date, make_date("2026-10-04"));
        assert_eq!(result.days, 2);
    }

    // ==========================================================================
    // Horizon
    // ==========================================================================

    #[test]
    fn test_no_weekend_within_horizon_is_error() {
        // Every weekend day in the next three weeks is a work day
        let records: Vec<OverrideRecord> = ["2026-10-17", "2026-10-18", "2026-10-24", "2026-10-25"]
            .iter()
            .map(|d| OverrideRecord::work_day(make_date(d), "Make-up"))
            .collect();

        let result = nearest_weekend(&records, make_date("2026-10-16"), 7);
        match result {
            Err(EngineError::NoCandidateFound { search, limit }) => {
                assert_eq!(search, "weekend");
                assert_eq!(limit, 7);
            }
            other => panic!("Expected NoCandidateFound, got {:?}", other),
        }
    }

    #[test]
    fn test_horizon_is_inclusive() {
        // Monday + 5 days = Saturday
        let result = nearest_weekend(&[], make_date("2026-10-12"), 5).unwrap();
        assert_eq!(result.start_date, make_date("2026-10-17"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let records = vec![OverrideRecord::work_day(make_date("2026-10-10"), "National Day")];
        let first = weekend(&records, "2026-10-08");
        let second = weekend(&records, "2026-10-08");
        assert_eq!(first, second);
    }
}
