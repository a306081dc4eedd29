//! Payday resolution.
//!
//! Without a target day the payday is the last work day of the current
//! month. With a target day-of-month it is the next calendar occurrence of
//! that day, skipping months too short to contain it.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::QueryConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{OverrideRecord, PAYDAY_NAME, PaydayResult};

use super::{OverrideIndex, is_work_day};

/// Default number of candidate months tried for a target day.
pub const DEFAULT_PAYDAY_LOOKAHEAD_MONTHS: u32 = 24;

/// Default number of days stepped back from month end looking for a work day.
pub const DEFAULT_MONTH_END_SCAN_LIMIT: u32 = 31;

/// What happens when the target day equals today's day-of-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameDayPayday {
    /// Today's payday counts as taken; resolve to next month's occurrence.
    #[default]
    NextMonth,
    /// Today is the payday (`days_left = 0`).
    Today,
}

/// A calendar month, used as the unit of the look-ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    fn last_day(self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }

    fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Returns the number of days in the given month.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2026, 2), Some(28));
/// assert_eq!(days_in_month(2028, 2), Some(29));
/// assert_eq!(days_in_month(2026, 12), Some(31));
/// assert_eq!(days_in_month(2026, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    YearMonth { year, month }.last_day().map(|d| d.day())
}

/// Finds the last work day of the month containing `date`.
///
/// Steps backward from the month's last calendar day, at most `scan_limit`
/// steps.
///
/// # Errors
///
/// [`EngineError::NoCandidateFound`] when every scanned day is a rest day.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{last_work_day_of_month, OverrideIndex};
/// use chrono::NaiveDate;
///
/// let index = OverrideIndex::default();
/// // 2026-01-31 is a Saturday, so the last work day is Friday the 30th
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let last = last_work_day_of_month(date, &index, 31).unwrap();
/// assert_eq!(last, NaiveDate::from_ymd_opt(2026, 1, 30).unwrap());
/// ```
pub fn last_work_day_of_month(
    date: NaiveDate,
    index: &OverrideIndex<'_>,
    scan_limit: u32,
) -> EngineResult<NaiveDate> {
    let exhausted = || EngineError::NoCandidateFound {
        search: "last work day of month".to_string(),
        limit: scan_limit,
    };

    let month = YearMonth::of(date);
    let month_end = month.last_day().ok_or_else(exhausted)?;

    (0..u64::from(scan_limit))
        .filter_map(|back| month_end.checked_sub_days(Days::new(back)))
        .take_while(|d| YearMonth::of(*d) == month)
        .find(|&d| is_work_day(d, index))
        .ok_or_else(exhausted)
}

/// Finds the next occurrence of `target_day` at or after `today`'s month.
///
/// # Errors
///
/// * [`EngineError::InvalidArgument`] when `target_day` is outside `1..=31`
/// * [`EngineError::NoCandidateFound`] when no month within `lookahead_months`
///   contains the day
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::{next_day_of_month, SameDayPayday};
/// use chrono::NaiveDate;
///
/// // No February 31st; March has one
/// let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
/// let payday = next_day_of_month(today, 31, SameDayPayday::NextMonth, 24).unwrap();
/// assert_eq!(payday, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
/// ```
pub fn next_day_of_month(
    today: NaiveDate,
    target_day: u32,
    same_day: SameDayPayday,
    lookahead_months: u32,
) -> EngineResult<NaiveDate> {
    if !(1..=31).contains(&target_day) {
        return Err(EngineError::InvalidArgument {
            field: "day".to_string(),
            message: format!("must be an integer between 1 and 31, got {}", target_day),
        });
    }

    let already_passed = match same_day {
        SameDayPayday::NextMonth => target_day <= today.day(),
        SameDayPayday::Today => target_day < today.day(),
    };

    let mut candidate = YearMonth::of(today);
    if already_passed {
        candidate = candidate.next();
    }

    for _ in 0..lookahead_months {
        if let Some(payday) = candidate.day(target_day) {
            return Ok(payday);
        }
        candidate = candidate.next();
    }

    Err(EngineError::NoCandidateFound {
        search: format!("payday on day {}", target_day),
        limit: lookahead_months,
    })
}

/// Resolves the next payday.
///
/// # Arguments
///
/// * `records` - The override list
/// * `today` - The query date
/// * `target_day` - Optional day-of-month the salary is paid on
/// * `config` - Look-ahead bounds and the same-day policy
///
/// # Returns
///
/// The payday and the whole days left until it, clamped at zero. With no
/// target the payday is the last work day of the current month, which may
/// already lie behind `today` at the very end of a month.
///
/// # Example
///
/// ```
/// use holiday_engine::calendar::resolve_payday;
/// use holiday_engine::config::QueryConfig;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
/// let result = resolve_payday(&[], today, Some(31), &QueryConfig::default()).unwrap();
/// assert_eq!(result.date, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
/// assert_eq!(result.days_left, 44);
/// ```
pub fn resolve_payday(
    records: &[OverrideRecord],
    today: NaiveDate,
    target_day: Option<u32>,
    config: &QueryConfig,
) -> EngineResult<PaydayResult> {
    let date = match target_day {
        None => {
            let index = OverrideIndex::new(records);
            last_work_day_of_month(today, &index, config.month_end_scan_limit)?
        }
        Some(day) => next_day_of_month(
            today,
            day,
            config.same_day_payday,
            config.payday_lookahead_months,
        )?,
    };

    let days_left = (date - today).num_days().max(0);
    debug!(%today, payday = %date, days_left, "Resolved payday");

    Ok(PaydayResult {
        name: PAYDAY_NAME.to_string(),
        date,
        days_left,
    })
}
