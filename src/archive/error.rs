use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Failed to create archive directory '{0}'")]
    DirectoryCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to read metadata for archive path '{0}'")]
    DirectoryMetadata(PathBuf, #[source] std::io::Error),

    #[error("Archive path exists but is not a directory: '{0}'")]
    NotADirectory(PathBuf),

    #[error("Failed to write file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
