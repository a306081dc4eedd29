//! In-memory override source.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{EngineError, EngineResult};
use crate::models::OverrideYear;

use super::OverrideSource;

/// Holds override tables in memory, keyed by year.
///
/// # Example
///
/// ```
/// use holiday_engine::models::{OverrideRecord, OverrideYear};
/// use holiday_engine::source::{MemorySource, OverrideSource};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = MemorySource::new(vec![OverrideYear {
///     year: 2026,
///     days: vec![OverrideRecord::off_day(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), "New Year")],
/// }]);
///
/// assert_eq!(source.fetch_year(2026).await.unwrap().days.len(), 1);
/// assert!(source.fetch_year(2027).await.is_err());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    years: HashMap<i32, OverrideYear>,
}

impl MemorySource {
    /// Creates a source from a list of tables. A later table for the same
    /// year replaces an earlier one.
    pub fn new(tables: Vec<OverrideYear>) -> Self {
        let years = tables.into_iter().map(|t| (t.year, t)).collect();
        Self { years }
    }
}

#[async_trait]
impl OverrideSource for MemorySource {
    async fn fetch_year(&self, year: i32) -> EngineResult<OverrideYear> {
        self.years
            .get(&year)
            .cloned()
            .ok_or_else(|| EngineError::UpstreamUnavailable {
                year,
                message: "no table loaded for this year".to_string(),
            })
    }
}
