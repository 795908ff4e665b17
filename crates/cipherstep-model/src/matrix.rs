//! Character grid shown by the columnar transposition frames.

use serde::{Deserialize, Serialize};

/// A rows × cols grid of characters, stored row-major.
///
/// Cells are `None` only in decrypt reconstructions where the ciphertext did
/// not fill every column chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Matrix {
    /// Lays `chars` out row-major in a grid with `cols` columns.
    ///
    /// The final row is left short (missing cells) if `chars` does not fill it.
    pub fn from_row_major(chars: &[char], cols: usize) -> Self {
        let cols = cols.max(1);
        let rows = chars.len().div_ceil(cols);
        let cells = (0..rows)
            .map(|r| (0..cols).map(|c| chars.get(r * cols + c).copied()).collect())
            .collect();
        Self { rows, cols, cells }
    }

    /// Builds a grid whose column `c` holds `columns[c]` top to bottom.
    ///
    /// Columns shorter than `rows` leave their lower cells empty.
    pub fn from_columns(columns: &[Vec<char>], rows: usize) -> Self {
        let cols = columns.len();
        let cells = (0..rows)
            .map(|r| columns.iter().map(|col| col.get(r).copied()).collect())
            .collect();
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Option<char>] {
        self.cells.get(row).map(Vec::as_slice).unwrap_or_default()
    }

    /// Present characters of one row, concatenated.
    pub fn row_text(&self, row: usize) -> String {
        self.row(row).iter().flatten().collect()
    }

    /// Present characters of one column, top to bottom.
    pub fn column_text(&self, col: usize) -> String {
        (0..self.rows).filter_map(|r| self.get(r, col)).collect()
    }
}
