use nix::errno::Errno;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("permission denied opening {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {path}: {source}")]
    DeviceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{request} rejected: {source}")]
    QueryRejected {
        request: &'static str,
        #[source]
        source: Errno,
    },
}

impl AcquisitionError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::DeviceUnavailable { path, source },
        }
    }

    pub fn query(request: &'static str, source: Errno) -> Self {
        Self::QueryRejected { request, source }
    }
}
