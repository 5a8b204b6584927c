//! Immutable data types.

mod matrix;

pub use matrix::{Matrix, Rows};
