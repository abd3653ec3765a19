use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use sheets_upload::cli::Cli;
use sheets_upload::config::Config;
use sheets_upload::server::{self, AppState};
use sheets_upload::upload::ensure_staging_dir;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    sheets_upload::logging::init(cli.verbose, cli.quiet);

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.resolve_upload_dir()?;

    ensure_staging_dir(&config.upload_dir)?;
    info!("Staging uploads in {}", config.upload_dir.display());

    if config.credentials_path.is_none() {
        warn!("GOOGLE_CREDENTIALS_PATH is not set; uploads will fail at the sheet step");
    }
    if config.spreadsheet_id.is_none() {
        warn!("SPREADSHEET_ID is not set; uploads will fail at the sheet step");
    }

    server::serve(AppState::new(config)).await
}
