//! Run configuration: where the feed comes from, where it is archived, and how long
//! the download may take.

use bon::Builder;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The aviationweather.gov cache of all current METARs, gzip-compressed XML.
pub const DEFAULT_SOURCE_URL: &str = "https://aviationweather.gov/data/cache/metars.cache.xml.gz";
/// Archive root, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = "data";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const SOURCE_URL_ENV: &str = "METAR_SOURCE_URL";
pub const BASE_DIR_ENV: &str = "METAR_DATA_DIR";
pub const TIMEOUT_ENV: &str = "METAR_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for METAR_TIMEOUT_SECS, expected whole seconds")]
    InvalidTimeout {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("METAR_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

/// Settings for a single archiving run.
///
/// Every field has a default, so only the parts that differ need to be set.
///
/// # Examples
///
/// ```
/// use metar_archiver::DownloaderConfig;
/// use std::time::Duration;
///
/// let config = DownloaderConfig::builder()
///     .base_dir("/var/lib/metar")
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// assert_eq!(config.source_url, metar_archiver::config::DEFAULT_SOURCE_URL);
/// assert_eq!(config.base_dir, std::path::PathBuf::from("/var/lib/metar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct DownloaderConfig {
    /// Url of the gzip-compressed METAR XML document.
    #[builder(into, default = DEFAULT_SOURCE_URL.to_string())]
    pub source_url: String,
    /// Root of the `<year>/<month>/<day>/<hour>-<minute>` tree.
    #[builder(into, default = PathBuf::from(DEFAULT_BASE_DIR))]
    pub base_dir: PathBuf,
    /// Upper bound on the whole HTTP exchange.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DownloaderConfig {
    /// Defaults, overridden by `METAR_SOURCE_URL`, `METAR_DATA_DIR` and
    /// `METAR_TIMEOUT_SECS` when those are set and non-empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty(TIMEOUT_ENV) {
            Some(value) => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::InvalidTimeout {
                        value: value.clone(),
                        source: e,
                    })?;
                if secs == 0 {
                    return Err(ConfigError::ZeroTimeout);
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self::builder()
            .maybe_source_url(non_empty(SOURCE_URL_ENV))
            .maybe_base_dir(non_empty(BASE_DIR_ENV))
            .maybe_timeout(timeout)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DownloaderConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.base_dir, PathBuf::from("data"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_no_env_means_defaults() -> Result<(), ConfigError> {
        let config = DownloaderConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config, DownloaderConfig::default());
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<(), ConfigError> {
        let config = DownloaderConfig::from_lookup(lookup_from(&[
            (SOURCE_URL_ENV, "http://127.0.0.1:8080/metars.xml.gz"),
            (BASE_DIR_ENV, "/tmp/metar"),
            (TIMEOUT_ENV, " 5 "),
        ]))?;
        assert_eq!(config.source_url, "http://127.0.0.1:8080/metars.xml.gz");
        assert_eq!(config.base_dir, PathBuf::from("/tmp/metar"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn test_empty_values_are_ignored() -> Result<(), ConfigError> {
        let config =
            DownloaderConfig::from_lookup(lookup_from(&[(BASE_DIR_ENV, ""), (TIMEOUT_ENV, "  ")]))?;
        assert_eq!(config, DownloaderConfig::default());
        Ok(())
    }

    #[test]
    fn test_bad_timeout() {
        let result = DownloaderConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "30s")]));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { value, .. }) if value == "30s"));

        let result = DownloaderConfig::from_lookup(lookup_from(&[(TIMEOUT_ENV, "0")]));
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }
}
