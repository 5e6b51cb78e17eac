use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("could not resolve home directory")]
    NoHomeDir,

    #[error("failed to create log directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write log file {path}")]
    WriteLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no free log file name for {0} after {1} attempts")]
    NameExhausted(String, usize),
}

pub type Result<T> = std::result::Result<T, CaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let err = CaptureError::WriteLog {
            path: PathBuf::from("/tmp/output-x.log"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/output-x.log"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("denied"));
    }
}
