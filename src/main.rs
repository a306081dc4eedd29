mod cli;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use holiday_engine::api::{AppState, create_router};
use holiday_engine::config::{ConfigLoader, EngineConfig, SourceKind};
use holiday_engine::service::HolidayService;
use holiday_engine::source;

use crate::cli::{Cli, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::from_config(apply_overrides(load_config(&cli)?, &cli))
        .context("invalid configuration after command-line overrides")?;

    let source_config = loader.source();
    let source = source::from_config(source_config).context("failed to build override source")?;
    match source_config.kind {
        SourceKind::Http => info!(
            base_url = %source_config.base_url,
            timeout_secs = source_config.timeout_secs,
            "Fetching override tables over HTTP"
        ),
        SourceKind::Directory => info!(
            data_dir = %source_config.data_dir.display(),
            "Reading override tables from disk"
        ),
    }

    let service = HolidayService::new(source, loader.config());
    let router = create_router(AppState::with_system_clock(service));

    let bind_address = &loader.server().bind_address;
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!(address = %bind_address, "Holiday engine listening");

    axum::serve(listener, router)
        .await
        .context("server terminated")?;
    Ok(())
}

/// Loads the explicit config file, else the default one when present,
/// else built-in defaults.
fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let path = match &cli.config {
        Some(path) => path.as_path(),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Path::new(DEFAULT_CONFIG_PATH),
        None => {
            info!("No configuration file, using defaults");
            return Ok(EngineConfig::default());
        }
    };

    let loader = ConfigLoader::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    Ok(loader.config().clone())
}

/// Applies command-line flags on top of the file configuration.
///
/// `--data-dir` selects the directory source and `--base-url` the HTTP one.
fn apply_overrides(mut config: EngineConfig, cli: &Cli) -> EngineConfig {
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        config.source.kind = SourceKind::Directory;
        config.source.data_dir = data_dir.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.source.kind = SourceKind::Http;
        config.source.base_url = base_url.clone();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.source.timeout_secs = timeout_secs;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("holiday-engine").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_flags_keep_file_configuration() {
        let config = apply_overrides(EngineConfig::default(), &parse(&[]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_data_dir_selects_directory_source() {
        let config = apply_overrides(EngineConfig::default(), &parse(&["-d", "/srv/holidays"]));

        assert_eq!(config.source.kind, SourceKind::Directory);
        assert_eq!(config.source.data_dir, PathBuf::from("/srv/holidays"));
    }

    #[test]
    fn test_base_url_selects_http_source() {
        let mut file = EngineConfig::default();
        file.source.kind = SourceKind::Directory;

        let config = apply_overrides(
            file,
            &parse(&["--base-url", "http://mirror.local/holiday-cn", "--timeout-secs", "3"]),
        );

        assert_eq!(config.source.kind, SourceKind::Http);
        assert_eq!(config.source.base_url, "http://mirror.local/holiday-cn");
        assert_eq!(config.source.timeout_secs, 3);
    }

    #[test]
    fn test_source_flags_conflict() {
        let result = Cli::try_parse_from([
            "holiday-engine",
            "--data-dir",
            "/srv/holidays",
            "--base-url",
            "http://mirror.local",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_flag_fails_validation() {
        let config = apply_overrides(EngineConfig::default(), &parse(&["--timeout-secs", "0"]));
        assert!(ConfigLoader::from_config(config).is_err());
    }

    #[test]
    fn test_bind_flag() {
        let config = apply_overrides(EngineConfig::default(), &parse(&["-b", "0.0.0.0:8080"]));
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
    }
}
