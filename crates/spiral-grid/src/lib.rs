//! Pipe-delimited integer grids and their spiral traversal.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - The immutable [`Matrix`] type
//! - [`core`] - Pure transformations: text parsing and spiral traversal
//! - [`error`] - Error types
//!
//! Nothing in here performs I/O; fetching the text is the caller's job.
//!
//! # Example
//!
//! ```
//! use spiral_grid::{parse_matrix, spiral};
//!
//! let text = "\
//! +----+----+
//! |  1 |  2 |
//! +----+----+
//! |  3 |  4 |
//! +----+----+
//! ";
//! let matrix = parse_matrix(text).unwrap();
//! assert_eq!(spiral(&matrix), vec![1, 3, 4, 2]);
//! ```

pub mod core;
pub mod data;
mod error;

pub use crate::core::{Spiral, parse_matrix, parse_rows, spiral};
pub use data::Matrix;
pub use error::{GridError, ParseError, Result};
