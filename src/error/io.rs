use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to walk directory tree under '{root}': {source}")]
    WalkError {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to open file '{path}': {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn walk_error(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::WalkError {
            root: root.into(),
            source,
        }
    }

    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenError {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_display() {
        let err = IoError::directory_not_found("/path/to/dir");
        assert_eq!(err.to_string(), "directory not found: /path/to/dir");
    }

    #[test]
    fn test_open_error_display() {
        let source = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IoError::open_error("/src/A.java", source);
        assert!(err.to_string().starts_with("failed to open file '/src/A.java'"));
    }

    #[test]
    fn test_walk_error_display() {
        let root = PathBuf::from("/nonexistent/walk/root");
        let walk_err = walkdir::WalkDir::new(&root)
            .into_iter()
            .next()
            .and_then(|r| r.err())
            .expect("walking a missing root should fail");

        let err = IoError::walk_error(&root, walk_err);
        assert!(err
            .to_string()
            .contains("failed to walk directory tree under '/nonexistent/walk/root'"));
    }
}
