use crate::archive::error::ArchiveError;
use crate::config::ConfigError;
use crate::feed::error::FeedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
