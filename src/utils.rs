use crate::archive::error::ArchiveError;
use log::info;
use std::io;
use std::path::Path;

/// Creates `path` and any missing parents. An existing directory is left alone.
pub async fn ensure_dir_exists(path: &Path) -> Result<(), ArchiveError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(ArchiveError::NotADirectory(path.to_path_buf()));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Creating archive directory: {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| ArchiveError::DirectoryCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(ArchiveError::DirectoryMetadata(path.to_path_buf(), e)),
    }
}
