//! the in-memory grid type and its whitespace-separated-decimal text form.

use super::error::{CodecError, CodecResult};

/// a two-dimensional grid of signed samples: an ordered sequence of rows,
/// each an ordered sequence of integers. rows may differ in length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<i32>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<i32>>) -> Self {
        Grid { rows }
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.len()).collect()
    }

    pub fn total_samples(&self) -> usize {
        self.rows.iter().map(|r| r.len()).sum()
    }

    /// parse a text grid: one row per line, samples separated by any run of
    /// whitespace. a trailing newline is optional; blank lines become empty
    /// rows.
    pub fn parse(text: &str) -> CodecResult<Grid> {
        if text.is_empty() {
            return Ok(Grid::new(Vec::new()));
        }

        let mut rows = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for token in line.split_ascii_whitespace() {
                let value: i32 = token.parse().map_err(|source| CodecError::TextParse {
                    line: line_idx + 1,
                    token: token.to_string(),
                    source,
                })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Grid::new(rows))
    }

    /// render back to text: samples joined by a single space, each row
    /// terminated by `\n`. an empty grid renders to an empty string.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&value.to_string());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_text_is_empty_grid() {
        let grid = Grid::parse("").unwrap();
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn parse_normalizes_whitespace_runs() {
        let grid = Grid::parse("1   2\t3\n4 5\n").unwrap();
        assert_eq!(grid.rows(), &[vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn parse_ragged_rows() {
        let grid = Grid::parse("1 2 3\n4 5\n6 7 8 9\n").unwrap();
        assert_eq!(grid.row_lengths(), vec![3, 2, 4]);
    }

    #[test]
    fn parse_negative_values() {
        let grid = Grid::parse("-1 -2 -3\n").unwrap();
        assert_eq!(grid.rows(), &[vec![-1, -2, -3]]);
    }

    #[test]
    fn parse_rejects_non_decimal_token() {
        let err = Grid::parse("1 2 x\n").unwrap_err();
        assert!(matches!(err, CodecError::TextParse { line: 1, .. }));
    }

    #[test]
    fn to_text_roundtrip_single_space_and_newline() {
        let grid = Grid::new(vec![vec![10, 11, 12]]);
        assert_eq!(grid.to_text(), "10 11 12\n");
    }

    #[test]
    fn to_text_empty_grid_is_empty_string() {
        let grid = Grid::new(Vec::new());
        assert_eq!(grid.to_text(), "");
    }
}
