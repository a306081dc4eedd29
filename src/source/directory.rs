//! Directory-backed override source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::OverrideYear;

use super::{OverrideSource, note_foreign_dates};

/// Reads `<dir>/<year>.json` files in the published holiday table format.
///
/// # Example
///
/// ```no_run
/// use holiday_engine::source::{DirectorySource, OverrideSource};
///
/// # async fn run() -> Result<(), holiday_engine::error::EngineError> {
/// let source = DirectorySource::new("./data/holidays");
/// let table = source.fetch_year(2026).await?;
/// println!("{} overridden dates", table.days.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Creates a source reading from `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the file path used for `year`.
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.dir.join(format!("{}.json", year))
    }
}

#[async_trait]
impl OverrideSource for DirectorySource {
    async fn fetch_year(&self, year: i32) -> EngineResult<OverrideYear> {
        let path = self.path_for(year);
        let unavailable = |message: String| EngineError::UpstreamUnavailable { year, message };

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| unavailable(format!("cannot read {}: {}", path.display(), e)))?;

        let table: OverrideYear = serde_json::from_str(&content)
            .map_err(|e| unavailable(format!("malformed {}: {}", path.display(), e)))?;

        if table.year != year {
            return Err(unavailable(format!(
                "{} declares year {}",
                path.display(),
                table.year
            )));
        }

        note_foreign_dates(&table);
        debug!(year, records = table.days.len(), path = %path.display(), "Loaded override table");
        Ok(table)
    }
}
