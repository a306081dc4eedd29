//! Query service tying override sources to the calendar functions.
//!
//! The service fetches the override table for today's year (plus the
//! following year near the year boundary), then runs one of the pure
//! queries in [`crate::calendar`] against it.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::calendar;
use crate::config::{EngineConfig, QueryConfig, SourceConfig};
use crate::error::EngineResult;
use crate::models::{
    NearestHolidayResult, OverrideRecord, PaydayResult, RemainingHolidaysResult, WeekendResult,
};
use crate::source::OverrideSource;

/// Answers holiday, weekend and payday queries for a given day.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use holiday_engine::config::EngineConfig;
/// use holiday_engine::models::{OverrideRecord, OverrideYear, WindowStatus};
/// use holiday_engine::service::HolidayService;
/// use holiday_engine::source::MemorySource;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// let source = MemorySource::new(vec![
///     OverrideYear { year: 2025, days: vec![] },
///     OverrideYear {
///         year: 2026,
///         days: vec![
///             OverrideRecord::off_day(d("2026-01-01"), "New Year"),
///             OverrideRecord::off_day(d("2026-01-02"), "New Year"),
///             OverrideRecord::off_day(d("2026-01-03"), "New Year"),
///         ],
///     },
/// ]);
/// let service = HolidayService::new(Arc::new(source), &EngineConfig::default());
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let nearest = service.nearest_holiday(d("2025-12-30")).await.unwrap().unwrap();
/// assert_eq!(nearest.status, WindowStatus::Upcoming);
/// assert_eq!(nearest.days_left, 2);
/// # });
/// ```
#[derive(Clone)]
pub struct HolidayService {
    source: Arc<dyn OverrideSource>,
    source_config: SourceConfig,
    queries: QueryConfig,
}

impl HolidayService {
    /// Creates a service over `source` with the given configuration.
    pub fn new(source: Arc<dyn OverrideSource>, config: &EngineConfig) -> Self {
        Self {
            source,
            source_config: config.source.clone(),
            queries: config.queries,
        }
    }

    /// Fetches the merged override list for `today`.
    ///
    /// Today's year is required. The following year is merged in when
    /// `include_next_year` is set; a failure to fetch it is logged and
    /// ignored so that queries keep working before next year's table is
    /// published.
    pub async fn override_table(&self, today: NaiveDate) -> EngineResult<Vec<OverrideRecord>> {
        let year = today.year();
        let mut records = self.source.fetch_year(year).await?.days;

        if self.source_config.include_next_year {
            match self.source.fetch_year(year + 1).await {
                Ok(next) => records.extend(next.days),
                Err(err) => warn!(
                    year = year + 1,
                    error = %err,
                    "Next year's override table unavailable, continuing without it"
                ),
            }
        }

        debug!(year, records = records.len(), "Assembled override table");
        Ok(records)
    }

    /// Holidays left in today's year.
    pub async fn remaining_holiday(
        &self,
        today: NaiveDate,
    ) -> EngineResult<RemainingHolidaysResult> {
        let records = self.override_table(today).await?;
        let result = calendar::remaining_holiday(&records, today, self.queries.remaining_boundary);
        debug!(
            %today,
            total = result.total_remaining_days,
            segments = result.segments.len(),
            "Computed remaining holidays"
        );
        Ok(result)
    }

    /// The ongoing or next holiday window, `None` when none is known.
    pub async fn nearest_holiday(
        &self,
        today: NaiveDate,
    ) -> EngineResult<Option<NearestHolidayResult>> {
        let records = self.override_table(today).await?;
        let result = calendar::nearest_holiday(&records, today);
        if result.is_none() {
            debug!(%today, "No future holiday in override table");
        }
        Ok(result)
    }

    /// The ongoing or next weekend.
    pub async fn nearest_weekend(&self, today: NaiveDate) -> EngineResult<WeekendResult> {
        let records = self.override_table(today).await?;
        calendar::nearest_weekend(&records, today, self.queries.weekend_horizon_days)
    }

    /// The next payday.
    ///
    /// A target day-of-month resolves purely on the calendar, so the
    /// override table is only fetched for the last-work-day rule.
    pub async fn resolve_payday(
        &self,
        today: NaiveDate,
        target_day: Option<u32>,
    ) -> EngineResult<PaydayResult> {
        let records = match target_day {
            Some(_) => Vec::new(),
            None => self.override_table(today).await?,
        };
        calendar::resolve_payday(&records, today, target_day, &self.queries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{OverrideYear, WindowStatus};
    use crate::source::MemorySource;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn table(year: i32, days: Vec<OverrideRecord>) -> OverrideYear {
        OverrideYear { year, days }
    }

    fn service_with(tables: Vec<OverrideYear>, config: EngineConfig) -> HolidayService {
        HolidayService::new(Arc::new(MemorySource::new(tables)), &config)
    }

    fn new_year_2026() -> OverrideYear {
        table(
            2026,
            vec![
                OverrideRecord::off_day(make_date("2026-01-01"), "New Year"),
                OverrideRecord::off_day(make_date("2026-01-02"), "New Year"),
                OverrideRecord::off_day(make_date("2026-01-03"), "New Year"),
                OverrideRecord::work_day(make_date("2026-01-04"), "New Year"),
            ],
        )
    }

    #[tokio::test]
    async fn test_override_table_merges_next_year() {
        let service = service_with(
            vec![table(2025, vec![]), new_year_2026()],
            EngineConfig::default(),
        );
        let records = service.override_table(make_date("2025-12-30")).await.unwrap();
        assert_eq!(records.len(), 4);
    }

    #[tokio::test]
    async fn test_override_table_without_next_year_flag() {
        let mut config = EngineConfig::default();
        config.source.include_next_year = false;
        let service = service_with(vec![table(2025, vec![]), new_year_2026()], config);

        let records = service.override_table(make_date("2025-12-30")).await.unwrap();
        assert!(records.is_empty());
        assert!(service.nearest_holiday(make_date("2025-12-30")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_next_year_is_tolerated() {
        let service = service_with(vec![new_year_2026()], EngineConfig::default());
        let records = service.override_table(make_date("2026-06-01")).await.unwrap();
        assert_eq!(records.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_current_year_is_upstream_unavailable() {
        let service = service_with(vec![new_year_2026()], EngineConfig::default());
        let result = service.remaining_holiday(make_date("2025-06-01")).await;
        assert!(matches!(
            result,
            Err(EngineError::UpstreamUnavailable { year: 2025, .. })
        ));
    }

    #[tokio::test]
    async fn test_nearest_holiday_across_year_end() {
        let service = service_with(
            vec![table(2025, vec![]), new_year_2026()],
            EngineConfig::default(),
        );
        let result = service.nearest_holiday(make_date("2025-12-30")).await.unwrap().unwrap();

        assert_eq!(result.status, WindowStatus::Upcoming);
        assert_eq!(result.label, "New Year");
        assert_eq!(result.start_date, make_date("2026-01-01"));
        assert_eq!(result.end_date, make_date("2026-01-03"));
        assert_eq!(result.days, 3);
        assert_eq!(result.days_left, 2);
    }

    #[tokio::test]
    async fn test_remaining_holiday_ignores_next_year() {
        let service = service_with(
            vec![table(2025, vec![]), new_year_2026()],
            EngineConfig::default(),
        );
        let result = service.remaining_holiday(make_date("2025-12-30")).await.unwrap();
        assert_eq!(result.total_remaining_days, 0);
    }

    #[tokio::test]
    async fn test_weekend_uses_next_year_overrides() {
        // Today Wednesday 2025-12-31; Saturday 2026-01-03 is an off-day and
        // Sunday 2026-01-04 a make-up work day
        let service = service_with(
            vec![table(2025, vec![]), new_year_2026()],
            EngineConfig::default(),
        );
        let result = service.nearest_weekend(make_date("2025-12-31")).await.unwrap();

        assert_eq!(result.start_date, make_date("2026-01-03"));
        assert_eq!(result.end_date, make_date("2026-01-03"));
        assert_eq!(result.days, 1);
    }

    #[tokio::test]
    async fn test_payday_with_target_skips_fetch() {
        let service = service_with(vec![], EngineConfig::default());
        let result = service.resolve_payday(make_date("2026-02-15"), Some(31)).await.unwrap();
        assert_eq!(result.date, make_date("2026-03-31"));
    }

    #[tokio::test]
    async fn test_payday_without_target_needs_table() {
        let service = service_with(vec![], EngineConfig::default());
        let result = service.resolve_payday(make_date("2026-02-15"), None).await;
        assert!(matches!(result, Err(EngineError::UpstreamUnavailable { .. })));
    }
}
