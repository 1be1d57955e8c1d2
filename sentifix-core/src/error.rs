use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixerError {
    #[error("Missing resource: {0} (run `sentifix fetch` or enable auto_download)")]
    ResourceMissing(String),
    #[error("Download of {url} failed: {reason}")]
    DownloadError { url: String, reason: String },
    #[error("Archive error: {0}")]
    ArchiveError(String),
    #[error("Malformed {}:{line}: {reason}", path.display())]
    MalformedData {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("Tagger model error: {0}")]
    ModelError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixerError::Io { path: path.into(), source }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        FixerError::MalformedData {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

pub type FixerResult<T> = Result<T, FixerError>;
