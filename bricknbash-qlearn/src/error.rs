//! Errors of the Q-learning crate.
use thiserror::Error;

/// Errors of reading or writing a [`QTable`](crate::QTable).
#[derive(Error, Debug)]
pub enum QTableError {
    #[error("Q-table I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed value {value:?} at line {line}, column {column}")]
    ParseFloat {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Q-table file has more than {0} rows")]
    TooManyRows(usize),

    #[error("line {line} has {found} values, the table has {expected} actions")]
    TooManyColumns {
        line: usize,
        found: usize,
        expected: usize,
    },
}

/// Rejected [`QLearnConfig`](crate::QLearnConfig) settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QLearnError {
    #[error("invalid Q-learning configuration: {0}")]
    InvalidConfig(String),
}
