//! Pure transformations over grid text and matrices.

mod parse;
mod traverse;

pub use parse::{parse_matrix, parse_rows};
pub use traverse::{Spiral, spiral};
