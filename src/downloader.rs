//! The archiving run: resolve the directory, fetch the feed, check it, write it out.

use crate::archive::layout::resolve_directory;
use crate::archive::persist::{persist, METADATA_FILENAME};
use crate::clock::{Clock, SystemClock};
use crate::config::DownloaderConfig;
use crate::error::ArchiverError;
use crate::feed::fetcher::FeedFetcher;
use crate::feed::validate::{validate_xml, XmlVerdict};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// The instant the run was stamped with.
    pub timestamp: DateTime<Utc>,
    /// The minute-bucket directory both files were written to.
    pub directory: PathBuf,
    pub xml_path: PathBuf,
    pub metadata_path: PathBuf,
    /// Length of the decompressed payload, as recorded in the sidecar.
    pub bytes_written: usize,
    /// Malformed XML is still written; this records that it was.
    pub verdict: XmlVerdict,
}

/// Runs one download-and-archive pass.
///
/// Create it with [`Downloader::new`] to stamp runs with the system time, or with
/// [`Downloader::with_clock`] to supply the instant yourself.
///
/// # Examples
///
/// ```no_run
/// # use metar_archiver::{ArchiverError, Downloader, DownloaderConfig};
/// # async fn run() -> Result<(), ArchiverError> {
/// let downloader = Downloader::new(DownloaderConfig::default())?;
/// let report = downloader.run().await?;
/// println!("Data saved to: {}", report.xml_path.display());
/// # Ok(())
/// # }
/// ```
pub struct Downloader {
    config: DownloaderConfig,
    fetcher: FeedFetcher,
    clock: Box<dyn Clock>,
}

impl Downloader {
    pub fn new(config: DownloaderConfig) -> Result<Self, ArchiverError> {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(
        config: DownloaderConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self, ArchiverError> {
        let fetcher = FeedFetcher::new(config.timeout)?;
        Ok(Self {
            config,
            fetcher,
            clock: Box::new(clock),
        })
    }

    /// The settings this downloader runs with.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Resolves the directory, downloads and decompresses the feed, validates it and
    /// writes the XML plus its `download_info.txt` sidecar.
    ///
    /// The directory is created before the download starts, so a failed download
    /// leaves an empty minute directory behind. A malformed document is logged and
    /// written anyway.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiverError::Archive`] if the directory can't be created or a file
    /// can't be written, and [`ArchiverError::Feed`] for network, HTTP status or
    /// decompression failures.
    pub async fn run(&self) -> Result<DownloadReport, ArchiverError> {
        info!("Starting METAR data download process...");

        let (directory, timestamp) =
            resolve_directory(&self.config.base_dir, self.clock.as_ref()).await?;
        info!("Created directory: {}", directory.display());

        let payload = self.fetcher.fetch(&self.config.source_url).await?;

        let verdict = validate_xml(&payload);
        if !verdict.is_well_formed() {
            warn!("Warning: XML content appears to be malformed");
        }

        let xml_path = persist(&payload, &directory, &timestamp, &self.config.source_url).await?;

        info!("METAR data processing completed successfully!");
        info!("Data saved to: {}", xml_path.display());

        Ok(DownloadReport {
            timestamp,
            metadata_path: directory.join(METADATA_FILENAME),
            directory,
            xml_path,
            bytes_written: payload.len(),
            verdict,
        })
    }
}
