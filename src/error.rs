use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while aggregating survey files.
///
/// Only `Discovery` aborts a run; every other variant is caught at the
/// per-file boundary, logged, and converted into a skip.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The survey directory itself is missing or unreadable. Fatal.
    #[error("failed to read survey directory {path:?}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single file could not be read or parsed as CSV.
    #[error("failed to load {file:?}")]
    Load {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no column with the expected header.
    #[error("{file:?} has no {column:?} column")]
    MissingColumn { file: PathBuf, column: String },

    /// The file has fewer data rows than the band configuration requires.
    #[error("{file:?} has {rows} rows, need at least {required}")]
    TooFewRows {
        file: PathBuf,
        rows: usize,
        required: usize,
    },

    /// A band reaches past the end of the table. Unreachable when the
    /// table was validated against the same configuration first.
    #[error("band {metric:?} needs rows up to {end}, table has {rows}")]
    BandRange {
        metric: String,
        end: usize,
        rows: usize,
    },
}

impl AggregateError {
    /// Whether this error aborts the whole run rather than skipping one file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AggregateError::Discovery { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_discovery_is_fatal() {
        let discovery = AggregateError::Discovery {
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(discovery.is_fatal());

        let short = AggregateError::TooFewRows {
            file: PathBuf::from("smith.csv"),
            rows: 20,
            required: 21,
        };
        assert!(!short.is_fatal());
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = AggregateError::MissingColumn {
            file: PathBuf::from("jones.csv"),
            column: "AVG".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("jones.csv"));
        assert!(msg.contains("AVG"));
    }
}
