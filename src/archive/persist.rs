use crate::archive::error::ArchiveError;
use crate::archive::layout::xml_filename;
use chrono::{DateTime, Utc};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the sidecar written next to every XML file.
pub const METADATA_FILENAME: &str = "download_info.txt";

/// Contents of the `download_info.txt` sidecar.
///
/// Renders as four `key: value` lines in a fixed order:
///
/// ```text
/// Download timestamp: 2025-09-12 14:30:05 UTC
/// Source URL: https://aviationweather.gov/data/cache/metars.cache.xml.gz
/// File size: 1234 bytes
/// XML filename: metars_20250912_1430UTC.xml
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadInfo {
    pub timestamp: DateTime<Utc>,
    pub source_url: String,
    pub file_size: usize,
    pub xml_filename: String,
}

impl fmt::Display for DownloadInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Download timestamp: {} UTC",
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Source URL: {}", self.source_url)?;
        writeln!(f, "File size: {} bytes", self.file_size)?;
        writeln!(f, "XML filename: {}", self.xml_filename)
    }
}

/// Writes `payload` verbatim into `directory`, then the metadata sidecar.
///
/// Both files are overwritten if they already exist. Returns the path of the XML file.
pub async fn persist(
    payload: &[u8],
    directory: &Path,
    timestamp: &DateTime<Utc>,
    source_url: &str,
) -> Result<PathBuf, ArchiveError> {
    let filename = xml_filename(timestamp);
    let xml_path = directory.join(&filename);

    write_file(&xml_path, payload).await?;
    info!("Successfully saved METAR data to {}", xml_path.display());

    let download_info = DownloadInfo {
        timestamp: *timestamp,
        source_url: source_url.to_string(),
        file_size: payload.len(),
        xml_filename: filename,
    };
    write_file(
        &directory.join(METADATA_FILENAME),
        download_info.to_string().as_bytes(),
    )
    .await?;

    Ok(xml_path)
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), ArchiveError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ArchiveError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
