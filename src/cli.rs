use std::path::PathBuf;

use clap::Parser;

/// Default configuration file, used when present and `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "config/holiday-engine.yaml";

/// Holiday, weekend and payday query server.
#[derive(Parser)]
#[command(
    name = "holiday-engine",
    version,
    about = "Serves holiday, weekend and payday queries over HTTP"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to YAML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the listen address from config.
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Read override tables from this directory instead of the configured source.
    #[arg(short, long = "data-dir", conflicts_with = "base_url")]
    pub data_dir: Option<PathBuf>,

    /// Fetch override tables from this base URL instead of the configured source.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Override the upstream request timeout from config, in seconds.
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}
