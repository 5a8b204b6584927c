//! Text to matrix parsing.
//!
//! The accepted format is a sequence of lines holding `|`-separated
//! integers, optionally framed as an ASCII table:
//!
//! ```text
//! +-----+-----+
//! |  10 |  20 |
//! +-----+-----+
//! ```

use crate::data::Matrix;
use crate::error::{ParseError, Result};

/// Characters stripped from both ends of every line.
const BORDER: &[char] = &['+', '-', '|', ' ', '\n'];

const DELIMITER: char = '|';

/// Parse text into rows of integers without checking that they line up.
///
/// Lines that are empty once the border characters are stripped are
/// skipped. Rows keep the order of their source lines.
///
/// Note that `-` belongs to the border set, so a minus sign on the first
/// field of a line is stripped along with the frame.
pub fn parse_rows(text: &str) -> std::result::Result<Vec<Vec<i64>>, ParseError> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim_matches(BORDER);
        if line.is_empty() {
            continue;
        }

        let row = line
            .split(DELIMITER)
            .map(|field| parse_field(field, index + 1))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse text into a rectangular [`Matrix`].
pub fn parse_matrix(text: &str) -> Result<Matrix> {
    Matrix::from_rows(parse_rows(text)?)
}

fn parse_field(field: &str, line: usize) -> std::result::Result<i64, ParseError> {
    field.trim().parse().map_err(|source| ParseError {
        line,
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    const FRAMED: &str = "\
+-----+-----+-----+-----+
|  10 |  20 |  30 |  40 |
+-----+-----+-----+-----+
|  50 |  60 |  70 |  80 |
+-----+-----+-----+-----+
";

    #[test]
    fn parses_bare_rows() {
        let rows = parse_rows("1|2|3\n4|5|6").unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn strips_table_borders() {
        let rows = parse_rows(FRAMED).unwrap();
        assert_eq!(rows, vec![vec![10, 20, 30, 40], vec![50, 60, 70, 80]]);
    }

    #[test]
    fn skips_border_only_and_blank_lines() {
        let rows = parse_rows("\n+---+\n   \n| 7 |\n---\n").unwrap();
        assert_eq!(rows, vec![vec![7]]);
    }

    #[test]
    fn empty_text_has_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_matrix("+--+\n").unwrap().is_empty());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let rows = parse_rows("| 1 | 2 |\r\n| 3 | 4 |\r\n").unwrap();
        assert_eq!(rows, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn interior_negatives_are_kept() {
        let rows = parse_rows("| 1 | -2 | 3 |").unwrap();
        assert_eq!(rows, vec![vec![1, -2, 3]]);
    }

    #[test]
    fn leading_minus_is_treated_as_border() {
        let rows = parse_rows("-5|6").unwrap();
        assert_eq!(rows, vec![vec![5, 6]]);
    }

    #[test]
    fn rejects_non_integer_field() {
        let err = parse_rows("1|2\n3|x|4").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.field, "x");
    }

    #[test]
    fn rejects_empty_field() {
        let err = parse_rows("1||2").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.field, "");
    }

    #[test]
    fn rejects_float_field() {
        assert!(parse_rows("1.5|2").is_err());
    }

    #[test]
    fn parse_matrix_rejects_ragged_text() {
        let err = parse_matrix("1|2\n3").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn parse_matrix_wraps_parse_errors() {
        let err = parse_matrix("| a |").unwrap_err();
        assert!(matches!(err, GridError::Parse(ParseError { line: 1, .. })));
    }
}
