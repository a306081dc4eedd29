//! Override table sources.
//!
//! The query functions never fetch anything themselves. An [`OverrideSource`]
//! hands them one materialized year at a time; failures surface as
//! [`EngineError::UpstreamUnavailable`](crate::error::EngineError::UpstreamUnavailable).

mod directory;
mod http;
mod memory;

use std::sync::Arc;

pub use directory::DirectorySource;
pub use http::HttpSource;
pub use memory::MemorySource;

use async_trait::async_trait;
use tracing::debug;

use crate::config::{SourceConfig, SourceKind};
use crate::error::EngineResult;
use crate::models::OverrideYear;

/// Supplies the override table for a given year.
#[async_trait]
pub trait OverrideSource: Send + Sync {
    /// Fetches the table published for `year`.
    async fn fetch_year(&self, year: i32) -> EngineResult<OverrideYear>;
}

/// Builds the source selected by `config.kind`.
///
/// # Errors
///
/// Returns `ConfigParseError` when the HTTP client cannot be built from the
/// configured base URL and timeout.
pub fn from_config(config: &SourceConfig) -> EngineResult<Arc<dyn OverrideSource>> {
    let source: Arc<dyn OverrideSource> = match config.kind {
        SourceKind::Directory => Arc::new(DirectorySource::new(&config.data_dir)),
        SourceKind::Http => Arc::new(HttpSource::new(&config.base_url, config.timeout())?),
    };
    Ok(source)
}

/// Logs tables that carry dates outside their own year.
///
/// Published tables sometimes list a make-up work day from the neighbouring
/// year; those records are kept.
fn note_foreign_dates(table: &OverrideYear) {
    if !table.is_year_scoped() {
        debug!(year = table.year, "Override table carries dates from another year");
    }
}
