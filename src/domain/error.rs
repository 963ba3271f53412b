// ============================================================
// Layer 3 — Error Types
// ============================================================
// Every failure the split pipeline can produce.
//
//   ConfigError  — parameters that cannot yield a valid split,
//                  either globally (test_split, interval) or
//                  for one specific class (series too short)
//   SplitError   — everything that reaches the caller:
//                  configuration, parse, empty input, I/O
//
// Nothing is retried. A ConfigError for a single class aborts
// the whole run: skipping the class would leave a hole in the
// dense label index range.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("test_split must lie strictly between 0 and 1, got {test_split}")]
    TestSplitOutOfRange { test_split: f64 },

    #[error("interval must be at least 1")]
    ZeroInterval,

    #[error("class '{class}': interval {interval} leaves no windows in {num_rows} rows")]
    IntervalTooLarge {
        class:    String,
        interval: usize,
        num_rows: usize,
    },

    #[error(
        "class '{class}': max test start {max_test_start} must exceed min test start {min_test_start}"
    )]
    DegenerateBounds {
        class:          String,
        min_test_start: usize,
        max_test_start: usize,
    },
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("class '{class}', row {row}, column {column}: cannot parse '{value}' as a number")]
    Parse {
        class:  String,
        row:    usize,
        column: usize,
        value:  String,
    },

    #[error("no class sources found in {location}")]
    EmptyInput { location: String },

    #[error("unknown class source '{name}'")]
    UnknownClass { name: String },

    #[error("class name '{name}' appears more than once")]
    DuplicateClass { name: String },

    #[error("cannot read {path}: {error}")]
    Io {
        path:  PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("csv error in class '{class}': {error}")]
    Csv {
        class: String,
        #[source]
        error: csv::Error,
    },
}

impl SplitError {
    /// True for the configuration family of errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SplitError::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_its_cause() {
        let err = SplitError::Io {
            path:  PathBuf::from("data"),
            error: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let cause = err.source().expect("io cause");
        assert_eq!(cause.to_string(), "gone");
    }

    #[test]
    fn test_cause_survives_anyhow_context() {
        let err = SplitError::Io {
            path:  PathBuf::from("data"),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
        };
        let wrapped = anyhow::Error::new(err).context("Split failed");
        let chain: Vec<String> = wrapped.chain().map(|e| e.to_string()).collect();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[2], "locked");
    }
}
