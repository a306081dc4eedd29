//! Configuration loading and management for the Holiday Query Engine.
//!
//! This module loads the engine configuration from a YAML file: where the
//! override tables come from, where the HTTP server listens, and the look-ahead
//! bounds and policies the queries use.
//!
//! # Example
//!
//! ```no_run
//! use holiday_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/holiday-engine.yaml").unwrap();
//! println!("Weekend horizon: {} days", config.queries().weekend_horizon_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BASE_URL, EngineConfig, QueryConfig, ServerConfig, SourceConfig, SourceKind,
};
