//! Error types for model directory scanning

use std::path::PathBuf;

/// Errors produced while scanning a model directory
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error{}: {source}", fmt_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error in {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        message: String,
        location: Option<(usize, usize)>,
    },
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl ScanError {
    pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
        Self::Io { path, source }
    }

    pub fn parse(path: PathBuf, message: String, location: Option<(usize, usize)>) -> Self {
        Self::Parse {
            path,
            message,
            location,
        }
    }

    /// Path of the file or directory the error originated from, if known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => path.as_ref(),
            Self::Parse { path, .. } => Some(path),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } => match path {
                Some(p) => format!("Failed to read {}: {}", p.display(), source),
                None => format!("IO error: {}", source),
            },
            Self::Parse {
                path,
                message,
                location,
            } => match location {
                Some((line, col)) => format!(
                    "Invalid JSON in {} at line {}, column {}: {}",
                    path.display(),
                    line,
                    col,
                    message
                ),
                None => format!("Invalid JSON in {}: {}", path.display(), message),
            },
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf());
        match err.into_io_error() {
            Some(io) => Self::Io { path, source: io },
            None => Self::Io {
                path,
                source: std::io::Error::other("walk cycle detected"),
            },
        }
    }
}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;
