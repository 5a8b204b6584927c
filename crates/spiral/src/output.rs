//! Rendering of traversal results and grids.

use spiral_grid::Matrix;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::Format;

impl Format {
    /// Render a traversal in this format, without a trailing newline.
    pub fn render(self, order: &[i64]) -> serde_json::Result<String> {
        match self {
            Format::Plain => Ok(order
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ")),
            Format::Json => serde_json::to_string(order),
        }
    }
}

/// Render `matrix` as a bordered ASCII table.
///
/// The result is accepted back by [`spiral_grid::parse_matrix`] as long as
/// the first column holds no negative numbers.
pub fn render_grid(matrix: &Matrix) -> String {
    if matrix.is_empty() {
        return String::new();
    }

    let mut builder = Builder::default();
    for row in matrix.iter_rows() {
        builder.push_record(row.iter().map(i64::to_string));
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_grid::parse_matrix;

    #[test]
    fn plain_is_space_separated() {
        assert_eq!(Format::Plain.render(&[10, -5, 7]).unwrap(), "10 -5 7");
        assert_eq!(Format::Plain.render(&[]).unwrap(), "");
    }

    #[test]
    fn json_is_an_array() {
        assert_eq!(Format::Json.render(&[1, 2, 3]).unwrap(), "[1,2,3]");
        assert_eq!(Format::Json.render(&[]).unwrap(), "[]");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        assert_eq!(render_grid(&Matrix::empty()), "");
    }

    #[test]
    fn rendered_grid_parses_back() {
        let matrix = Matrix::from_rows([[10i64, 20, 30], [400, -5, 6000]]).unwrap();
        let rendered = render_grid(&matrix);

        assert!(rendered.starts_with('+'));
        assert_eq!(parse_matrix(&rendered).unwrap(), matrix);
    }
}
