//! Error types for biorisk I/O and parsing boundaries.
//!
//! The scoring engine itself is total and has no error path; errors only
//! arise when reading forms or configuration from disk, parsing them, or
//! writing reports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioriskError {
    /// File system failures (read, write, permissions).
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A form file that could not be parsed.
    #[error("failed to parse form {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A form file in a format we do not read.
    #[error("unsupported form format for {path}: expected .toml or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Configuration file issues.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input constraint violations on the strict path.
    #[error("validation error: {0}")]
    Validation(String),
}

impl BioriskError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BioriskError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        BioriskError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_the_file() {
        let err = BioriskError::parse("form.toml", "missing field");
        assert_eq!(
            err.to_string(),
            "failed to parse form form.toml: missing field"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BioriskError::io("form.json", inner);
        assert!(err.source().is_some());
    }
}
