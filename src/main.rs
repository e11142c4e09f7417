use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use ghost_term::core::config::{self, ResolvedConfig};
use ghost_term::ghost::GhostClient;
use ghost_term::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "ghost-term",
    version,
    about = "Read a Ghost blog from the terminal"
)]
struct Args {}

/// `~/.ghost-term/ghost-term.log`, or the working directory without a home.
fn log_path() -> PathBuf {
    config::config_dir()
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("ghost-term.log"))
        .unwrap_or_else(|| PathBuf::from("ghost-term.log"))
}

fn init_logging(config: &ResolvedConfig) {
    let level = LevelFilter::from_str(&config.log_level).unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(log_path()) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ghost-term: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = config::resolve(&file_config);
    init_logging(&resolved);

    log::info!(
        "ghost-term starting up against {} (api key {})",
        resolved.base_url,
        if resolved.api_key.is_some() { "set" } else { "unset" }
    );

    let client = GhostClient::from_config(&resolved)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    tui::run(resolved, Arc::new(client))
}
