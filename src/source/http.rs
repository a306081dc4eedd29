//! HTTP-backed override source.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Url};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::OverrideYear;

use super::{OverrideSource, note_foreign_dates};

/// Fetches `<base_url>/<year>.json` from a holiday-cn style mirror.
///
/// Successfully decoded years are cached for the life of the source; a
/// failed fetch is retried on the next request.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use holiday_engine::config::DEFAULT_BASE_URL;
/// use holiday_engine::source::{HttpSource, OverrideSource};
///
/// # async fn run() -> Result<(), holiday_engine::error::EngineError> {
/// let source = HttpSource::new(DEFAULT_BASE_URL, Duration::from_secs(10))?;
/// let table = source.fetch_year(2026).await?;
/// println!("{} overridden dates", table.days.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    cache: Arc<RwLock<HashMap<i32, OverrideYear>>>,
}

impl HttpSource {
    /// Creates a source for `base_url` whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` if `base_url` is not an absolute URL or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> EngineResult<Self> {
        Self::with_builder(base_url, Client::builder().timeout(timeout))
    }

    fn with_builder(base_url: &str, builder: ClientBuilder) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: "source.base_url".to_string(),
            message,
        };

        Url::parse(base_url)
            .map_err(|e| invalid(format!("'{}' is not a valid URL: {}", base_url, e)))?;

        let client = builder
            .user_agent(concat!("holiday-engine/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| invalid(format!("failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Returns the URL requested for `year`.
    pub fn url_for(&self, year: i32) -> String {
        format!("{}/{}.json", self.base_url, year)
    }

    async fn download(&self, year: i32) -> EngineResult<OverrideYear> {
        let url = self.url_for(year);
        let unavailable = |message: String| EngineError::UpstreamUnavailable { year, message };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| unavailable(format!("request to {} failed: {}", url, e)))?;

        let table: OverrideYear = response
            .json()
            .await
            .map_err(|e| unavailable(format!("malformed response from {}: {}", url, e)))?;

        if table.year != year {
            return Err(unavailable(format!("{} declares year {}", url, table.year)));
        }

        note_foreign_dates(&table);
        debug!(year, records = table.days.len(), url = %url, "Downloaded override table");
        Ok(table)
    }
}

#[async_trait]
impl OverrideSource for HttpSource {
    async fn fetch_year(&self, year: i32) -> EngineResult<OverrideYear> {
        if let Some(table) = self.cache.read().await.get(&year) {
            return Ok(table.clone());
        }

        let table = self.download(year).await.inspect_err(|e| {
            warn!(year, error = %e, "Override table download failed");
        })?;

        self.cache.write().await.insert(year, table.clone());
        Ok(table)
    }
}
