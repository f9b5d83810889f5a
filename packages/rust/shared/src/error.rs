//! Error types for lessontable.
//!
//! Library crates use [`LessonTableError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all lessontable operations.
#[derive(Debug, thiserror::Error)]
pub enum LessonTableError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The index document has no usable lessons section.
    #[error("manifest error: {message}")]
    Manifest { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No lesson produced a record, so there is no header to write.
    #[error("no lesson records to write to {path:?}")]
    EmptyTable { path: PathBuf },

    /// CSV serialization error.
    #[error("csv error at {path:?}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Data validation error (bad identifier, invalid option, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LessonTableError>;

impl LessonTableError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a manifest error from any displayable message.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a `csv::Error` (or anything displayable) with the output path.
    pub fn csv(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Csv {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = LessonTableError::manifest("label \"Lessons\" not found");
        assert_eq!(err.to_string(), "manifest error: label \"Lessons\" not found");

        let err = LessonTableError::EmptyTable {
            path: PathBuf::from("day6.csv"),
        };
        assert!(err.to_string().contains("day6.csv"));
    }

    #[test]
    fn io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LessonTableError::io("../intro.md", source);
        let msg = err.to_string();
        assert!(msg.contains("intro.md"));
        assert!(msg.contains("denied"));
    }
}
