//! Downloads the aviationweather.gov METAR cache (gzip-compressed XML) and archives it
//! under `<base>/<year>/<month>/<day>/<hour>-<minute>/`, next to a `download_info.txt`
//! sidecar describing the download.

pub mod archive;
mod clock;
pub mod config;
mod downloader;
mod error;
pub mod feed;
mod runner;
mod utils;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, DownloaderConfig};
pub use downloader::{DownloadReport, Downloader};
pub use error::ArchiverError;
pub use runner::{run_to_exit_code, EXIT_FAILURE, EXIT_SUCCESS};

pub use archive::error::ArchiveError;
pub use archive::persist::DownloadInfo;
pub use feed::error::FeedError;
pub use feed::validate::XmlVerdict;
