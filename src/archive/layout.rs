//! Where a run's files go: `<base>/<YYYY>/<MM>/<DD>/<HH>-<mm>/metars_<YYYYMMDD>_<HHMM>UTC.xml`.

use crate::archive::error::ArchiveError;
use crate::clock::Clock;
use crate::utils::ensure_dir_exists;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::path::{Path, PathBuf};

/// Directory for the minute bucket `timestamp` falls in. Seconds are dropped.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use metar_archiver::archive::layout::directory_for;
/// use std::path::Path;
///
/// let instant = Utc.with_ymd_and_hms(2025, 9, 12, 14, 30, 5).unwrap();
/// assert_eq!(
///     directory_for(Path::new("data"), &instant),
///     Path::new("data/2025/09/12/14-30")
/// );
/// ```
pub fn directory_for(base: &Path, timestamp: &DateTime<Utc>) -> PathBuf {
    base.join(timestamp.year().to_string())
        .join(format!("{:02}", timestamp.month()))
        .join(format!("{:02}", timestamp.day()))
        .join(format!("{:02}-{:02}", timestamp.hour(), timestamp.minute()))
}

/// Name of the XML file written for `timestamp`, e.g. `metars_20250912_1430UTC.xml`.
pub fn xml_filename(timestamp: &DateTime<Utc>) -> String {
    format!("metars_{}UTC.xml", timestamp.format("%Y%m%d_%H%M"))
}

/// Captures the run's instant from `clock` and makes sure its directory exists.
///
/// Returns the directory together with the captured instant, which the rest of the
/// run must reuse so the filename and sidecar agree with the directory.
pub async fn resolve_directory(
    base: &Path,
    clock: &dyn Clock,
) -> Result<(PathBuf, DateTime<Utc>), ArchiveError> {
    let timestamp = clock.now();
    let directory = directory_for(base, &timestamp);
    ensure_dir_exists(&directory).await?;
    Ok((directory, timestamp))
}
