//! Turns one run into a process exit status.

use crate::config::{ConfigError, DownloaderConfig};
use crate::downloader::Downloader;
use crate::error::ArchiverError;
use std::error::Error;

pub const EXIT_SUCCESS: u8 = 0;
/// Returned for every fatal error: bad configuration, network, HTTP status,
/// decompression or filesystem failures.
pub const EXIT_FAILURE: u8 = 1;

/// Runs the archiver once with `config` and reports the outcome as an exit status.
///
/// Errors are printed to stdout along with their `caused by` chain.
pub async fn run_to_exit_code(config: Result<DownloaderConfig, ConfigError>) -> u8 {
    match run(config).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            println!("Error: {}", e);

            let mut cause = e.source();
            while let Some(err) = cause {
                println!("  caused by: {}", err);
                cause = err.source();
            }

            EXIT_FAILURE
        }
    }
}

async fn run(config: Result<DownloaderConfig, ConfigError>) -> Result<(), ArchiverError> {
    Downloader::new(config?)?.run().await?;
    Ok(())
}
