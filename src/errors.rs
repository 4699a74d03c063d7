use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce VisitError
pub type VisitResult<T> = Result<T, VisitError>;

/// Error type for fs-visitor
#[derive(Debug, Error)]
pub enum VisitError {
    /// The root path handed to `search` was empty or all whitespace
    #[error("invalid root path {0:?}: must not be empty or whitespace")]
    InvalidArgument(String),

    /// The root path does not resolve to an existing file or directory
    #[error("no file or directory found at {0:?}")]
    NotFound(String),

    /// An accessor index fell outside the saved-item collection
    #[error("index {index} is out of range for {len} saved items")]
    OutOfRange { index: usize, len: usize },

    /// A glob pattern failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Directory enumeration failed mid-walk
    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl From<walkdir::Error> for VisitError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let source = match err.io_error() {
            Some(io_err) => std::io::Error::new(io_err.kind(), io_err.to_string()),
            None => std::io::Error::new(std::io::ErrorKind::Other, err.to_string()),
        };
        VisitError::Io { source, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_display() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let visit_error = VisitError::Io {
            source: io_error,
            path: PathBuf::from("/test/path"),
        };
        assert_eq!(
            visit_error.to_string(),
            "filesystem error at /test/path: file not found"
        );
    }

    #[test]
    fn test_invalid_argument_display() {
        let visit_error = VisitError::InvalidArgument(" ".to_string());
        assert_eq!(
            visit_error.to_string(),
            "invalid root path \" \": must not be empty or whitespace"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let visit_error = VisitError::OutOfRange { index: 3, len: 2 };
        assert_eq!(
            visit_error.to_string(),
            "index 3 is out of range for 2 saved items"
        );
    }

    #[test]
    fn test_from_walkdir_error() {
        let err = walkdir::WalkDir::new("/no/such/path/for/sure")
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();
        let visit_error: VisitError = err.into();
        match visit_error {
            VisitError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/no/such/path/for/sure"))
            }
            _ => panic!("expected Io variant"),
        }
    }
}
