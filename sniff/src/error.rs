use std::path::PathBuf;

use sniff_common::read::RestoreError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read header: {0}")]
    Read(std::io::Error),
    #[error("Could not restore stream position: {0}")]
    Seek(std::io::Error),
}

impl Error {
    /// Returns `true` if the file or stream does not exist
    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == std::io::ErrorKind::NotFound
    }

    /// Underlying I/O error of any variant
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Open { source, .. } => source,
            Self::Read(err) | Self::Seek(err) => err,
        }
    }
}

impl From<RestoreError> for Error {
    fn from(value: RestoreError) -> Self {
        match value {
            RestoreError::Read(err) => Self::Read(err),
            RestoreError::Seek(err) => Self::Seek(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown image format tag '{0}'")]
pub struct UnknownFormatError(pub String);
