//! Error types for the spiral pipeline.

use spiral_fetch::FetchError;
use spiral_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed matrix document")]
    Grid(#[from] GridError),
}

pub type Result<T> = std::result::Result<T, Error>;
