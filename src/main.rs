//! METAR archiver.
//!
//! Downloads the current METAR cache once and stores it in the archive tree. Takes no
//! arguments; see `DownloaderConfig::from_env` for the environment overrides.

use metar_archiver::{run_to_exit_code, DownloaderConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    ExitCode::from(run_to_exit_code(DownloaderConfig::from_env()).await)
}
