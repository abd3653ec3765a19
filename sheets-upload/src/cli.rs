//! Command-line arguments

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Upload Excel workbooks and append their rows to a Google Sheets worksheet
#[derive(Debug, Parser)]
#[command(name = "sheets-upload", version, about)]
pub struct Cli {
    /// Address to listen on (overrides BIND_ADDR)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Staging directory for uploaded files (overrides UPLOAD_FOLDER)
    #[arg(long)]
    pub upload_dir: Option<PathBuf>,

    /// Maximum request body size in bytes (overrides MAX_UPLOAD_BYTES)
    #[arg(long)]
    pub max_upload_bytes: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Cli {
    /// Apply command-line overrides on top of environment configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(dir) = &self.upload_dir {
            config.upload_dir = dir.clone();
        }
        if let Some(limit) = self.max_upload_bytes {
            config.max_upload_bytes = limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from([
            "sheets-upload",
            "--bind",
            "0.0.0.0:8000",
            "--upload-dir",
            "/srv/uploads",
            "--max-upload-bytes",
            "2048",
            "-vv",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.upload_dir, PathBuf::from("/srv/uploads"));
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["sheets-upload"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["sheets-upload", "-v", "-q"]).is_err());
    }
}
