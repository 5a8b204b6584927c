//! Error types for spiral-grid.

use std::num::ParseIntError;

use thiserror::Error;

/// A data field that is not a valid base-10 integer literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: invalid integer field '{field}': {source}")]
pub struct ParseError {
    /// 1-based line number in the source text.
    pub line: usize,
    pub field: String,
    #[source]
    pub source: ParseIntError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} is empty")]
    EmptyRow { row: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;
