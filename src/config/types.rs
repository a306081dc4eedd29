//! Configuration types for the Holiday Query Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file (or no file at all) is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::calendar::{
    DEFAULT_MONTH_END_SCAN_LIMIT, DEFAULT_PAYDAY_LOOKAHEAD_MONTHS, DEFAULT_WEEKEND_HORIZON_DAYS,
    SameDayPayday, TodayBoundary,
};

/// Published holiday-cn tables, one `<year>.json` per year.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/NateScarlet/holiday-cn@master";

/// Which [`OverrideSource`](crate::source::OverrideSource) backs the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Fetch `<base_url>/<year>.json` over HTTP.
    #[default]
    Http,
    /// Read `<data_dir>/<year>.json` from disk.
    Directory,
}

/// Where override tables are read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source backend.
    pub kind: SourceKind,
    /// Base URL of the published tables, used by the `http` kind.
    pub base_url: String,
    /// Request timeout in seconds, used by the `http` kind.
    pub timeout_secs: u64,
    /// Directory holding one `<year>.json` file per year, used by the
    /// `directory` kind.
    pub data_dir: PathBuf,
    /// Whether to merge the following year's table into each query.
    pub include_next_year: bool,
}

impl SourceConfig {
    /// Request timeout for the `http` kind.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            data_dir: PathBuf::from("./data/holidays"),
            include_next_year: true,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Bounds and policies used by the query functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Days scanned past today when looking for a weekend.
    pub weekend_horizon_days: u32,
    /// Candidate months tried when resolving a payday day-of-month.
    pub payday_lookahead_months: u32,
    /// Days stepped back from month end looking for the last work day.
    pub month_end_scan_limit: u32,
    /// Policy when the payday target equals today's day-of-month.
    pub same_day_payday: SameDayPayday,
    /// Whether an off-day dated today counts as remaining.
    pub remaining_boundary: TodayBoundary,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            weekend_horizon_days: DEFAULT_WEEKEND_HORIZON_DAYS,
            payday_lookahead_months: DEFAULT_PAYDAY_LOOKAHEAD_MONTHS,
            month_end_scan_limit: DEFAULT_MONTH_END_SCAN_LIMIT,
            same_day_payday: SameDayPayday::default(),
            remaining_boundary: TodayBoundary::default(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Override table source.
    pub source: SourceConfig,
    /// HTTP server.
    pub server: ServerConfig,
    /// Query bounds and policies.
    pub queries: QueryConfig,
}
