use crate::feed::error::FeedError;
use async_compression::tokio::bufread::GzipDecoder;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Downloads the gzip-compressed METAR cache and hands back the decompressed bytes.
pub struct FeedFetcher {
    download_client: Client,
}

impl FeedFetcher {
    /// Builds a fetcher whose requests are bounded by `timeout` (connect + full body).
    pub fn new(timeout: Duration) -> Result<Self, FeedError> {
        let download_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FeedError::ClientBuild)?;
        Ok(Self { download_client })
    }

    /// Issues a single GET for `url`, buffers the whole body, then gunzips it.
    ///
    /// There are no retries: a network error, a timeout, a non-success status or a
    /// body that isn't valid gzip all come back as an error.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        info!("Downloading METAR data from {}", url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FeedError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FeedError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let compressed = response
            .bytes()
            .await
            .map_err(|e| FeedError::BodyRead(url.to_string(), e))?;

        info!("Decompressing data...");
        let decompressed = decompress_gzip(&compressed).await?;
        info!(
            "Decompressed {} bytes into {} bytes of XML",
            compressed.len(),
            decompressed.len()
        );
        Ok(decompressed)
    }
}

/// Gunzips an in-memory buffer. Concatenated gzip members are decoded back to back.
pub async fn decompress_gzip(compressed: &[u8]) -> Result<Vec<u8>, FeedError> {
    let mut decoder = GzipDecoder::new(compressed);
    decoder.multiple_members(true);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .await
        .map_err(FeedError::Decompression)?;
    Ok(decompressed)
}
