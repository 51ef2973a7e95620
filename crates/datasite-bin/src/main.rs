//! Datasite metadata setup - key pair, permissions, and metadata.json for the
//! current user's datasite.

use std::path::{Path, PathBuf};

use clap::Parser;
use datasite_config_and_utils::{init_logging, Paths};
use datasite_metadata::{run, DatasiteApp, SetupReport, APP_NAME};
use keygen_ops::SshKeygenProvider;

/// Publish this machine's datasite metadata.
#[derive(Parser, Debug)]
#[command(name = "datasite-metadata")]
#[command(about = "Generate the datasite key pair and publish metadata.json")]
#[command(version)]
struct Cli {
    /// Path to the sync client's config.json. Defaults to $SYFTBOX_CLIENT_CONFIG_PATH
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Home directory holding `.ssh` and `.syftbox/logs`. Defaults to the current user's home
    #[arg(long)]
    home: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let paths = match cli.home {
        Some(home) => Paths::with_home(home),
        None => Paths::new()?,
    };

    init_logging(APP_NAME, &cli.log_level, Some(paths.log_file()));

    if let Err(err) = setup(cli.config.as_deref(), &paths) {
        tracing::error!(error = %err, "setup failed");
        return Err(err);
    }

    Ok(())
}

fn setup(config: Option<&Path>, paths: &Paths) -> Result<SetupReport, Box<dyn std::error::Error>> {
    let app = match config {
        Some(path) => DatasiteApp::load(path, APP_NAME)?,
        None => DatasiteApp::from_env(APP_NAME)?,
    };

    let report = run(&app, paths, &SshKeygenProvider::default())?;
    tracing::debug!(
        key_pair = ?report.key_pair,
        permission_file = %report.permission_file.display(),
        metadata_file = %report.metadata_file.display(),
        "setup report"
    );
    Ok(report)
}
