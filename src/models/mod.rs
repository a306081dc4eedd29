//! Core data models for the Holiday Query Engine.
//!
//! This module contains the override table types consumed by the engine and
//! the result records it produces.

mod override_record;
mod query_result;

pub use override_record::{OverrideRecord, OverrideYear};
pub use query_result::{
    HolidaySummary, NearestHolidayResult, PAYDAY_NAME, PaydayResult, RemainingHolidaysResult,
    WEEKEND_NAME, WeekendResult, WindowStatus,
};
