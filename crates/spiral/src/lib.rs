//! Fetch a pipe-delimited integer grid and print it in spiral order.
//!
//! The binary wires three stages together: [`spiral_fetch`] retrieves the
//! document, [`spiral_grid`] parses it and walks it. This library half
//! exposes that wiring so it can be driven by test clients.

pub mod cli;
pub mod logging;
pub mod output;
pub mod pipeline;
mod error;

pub use cli::{App, Format};
pub use error::{Error, Result};
pub use pipeline::{Exit, Traversal, run, traverse_url};

/// Document fetched when no URL is given.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/avito-tech/python-trainee-assignment/main/matrix.txt";
