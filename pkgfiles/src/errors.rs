use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building or populating a [crate::FilesGroup].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no reference assembly location known for {framework} on this host")]
    UnsupportedPlatform { framework: String },

    #[error("unable to walk {0}: {1}")]
    UnableToWalk(PathBuf, #[source] walkdir::Error),

    #[error("path {0:?} is not valid UTF-8")]
    NonUtf8Path(PathBuf),
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::InvalidArgument(msg) => Self::new(std::io::ErrorKind::InvalidInput, msg),
            Error::UnsupportedPlatform { .. } => {
                Self::new(std::io::ErrorKind::Unsupported, value.to_string())
            }
            Error::UnableToWalk(_, e) => e.into(),
            Error::NonUtf8Path(_) => Self::new(std::io::ErrorKind::InvalidData, value.to_string()),
        }
    }
}
