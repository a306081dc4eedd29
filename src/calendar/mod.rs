//! Calendar logic for the Holiday Query Engine.
//!
//! This module contains the pure query functions: rest-day classification,
//! holiday window segmentation, remaining and nearest holiday lookup,
//! nearest weekend lookup and payday resolution. Every function takes the
//! override list and "today" as plain inputs and performs no I/O.

mod day_classifier;
mod holidays;
mod payday;
mod segments;
mod weekend;

pub use day_classifier::{OverrideIndex, is_natural_weekend, is_rest_day, is_work_day};
pub use holidays::{nearest_holiday, remaining_holiday};
pub use payday::{
    DEFAULT_MONTH_END_SCAN_LIMIT, DEFAULT_PAYDAY_LOOKAHEAD_MONTHS, SameDayPayday, days_in_month,
    last_work_day_of_month, next_day_of_month, resolve_payday,
};
pub use segments::{HolidaySegment, LabelTally, TodayBoundary, build_future_segments};
pub use weekend::{DEFAULT_WEEKEND_HORIZON_DAYS, nearest_weekend};
