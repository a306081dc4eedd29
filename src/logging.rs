//! Tracing setup for the server binary.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The library and this binary both log under this prefix.
const ENGINE_TARGET: &str = "holiday_engine";

/// Dependency targets enabled from `-vv` upward. axum reports extractor
/// rejections under `axum::rejection`; reqwest logs upstream connections.
const DEPENDENCY_TARGETS: &[&str] = &["axum::rejection", "reqwest"];

/// Maps the `-v` count to a level name.
///
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
fn level_name(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level_name(verbosity);
    let mut directives = vec![format!("{ENGINE_TARGET}={level}")];
    if verbosity >= 2 {
        directives.extend(DEPENDENCY_TARGETS.iter().map(|t| format!("{t}={level}")));
    }
    directives.join(",")
}

/// Installs the global subscriber.
///
/// `RUST_LOG` replaces the `-v` mapping entirely when set.
pub fn init(verbosity: u8) {
    let (filter, origin) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, "RUST_LOG"),
        Err(_) => (EnvFilter::new(default_directives(verbosity)), "--verbose"),
    };
    let directives = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(filter = %directives, origin, "Logging initialized");
}
