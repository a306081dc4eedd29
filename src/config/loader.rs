//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, QueryConfig, ServerConfig, SourceConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// source:
///   kind: http
///   base_url: https://cdn.jsdelivr.net/gh/NateScarlet/holiday-cn@master
///   timeout_secs: 10
///   data_dir: ./data/holidays
///   include_next_year: true
/// server:
///   bind_address: 127.0.0.1:3000
/// queries:
///   weekend_horizon_days: 120
///   payday_lookahead_months: 24
///   month_end_scan_limit: 31
///   same_day_payday: next_month
///   remaining_boundary: inclusive
/// ```
///
/// # Example
///
/// ```no_run
/// use holiday_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/holiday-engine.yaml").unwrap();
/// println!("Reading tables from {}", loader.source().base_url);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unknown value (`ConfigParseError`)
    /// - A look-ahead bound or the source timeout is zero (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration, such as one amended by
    /// command-line flags, after the same validation [`load`](Self::load)
    /// applies.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(&config).map_err(|message| EngineError::ConfigParseError {
            path: "<in-memory>".to_string(),
            message,
        })?;
        Ok(Self { config })
    }

    fn parse(content: &str) -> Result<EngineConfig, String> {
        // An empty document deserializes to unit, not a struct
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        let config: EngineConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Rejects bounds that would make every search fail immediately.
    fn validate(config: &EngineConfig) -> Result<(), String> {
        if config.source.timeout_secs == 0 {
            return Err("source.timeout_secs must be greater than zero".to_string());
        }

        let queries = &config.queries;
        let bounds = [
            ("weekend_horizon_days", queries.weekend_horizon_days),
            ("payday_lookahead_months", queries.payday_lookahead_months),
            ("month_end_scan_limit", queries.month_end_scan_limit),
        ];
        for (name, value) in bounds {
            if value == 0 {
                return Err(format!("queries.{} must be greater than zero", name));
            }
        }
        Ok(())
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the override source settings.
    pub fn source(&self) -> &SourceConfig {
        &self.config.source
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the query bounds and policies.
    pub fn queries(&self) -> &QueryConfig {
        &self.config.queries
    }
}
