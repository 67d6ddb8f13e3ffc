//! Labeled contingency tables.
//!
//! A contingency table cross-classifies counts by two categorical variables,
//! one per axis. Tables here are tiny (at most 2 rows by 7 columns in the
//! study data), so marginals are recomputed on demand rather than cached.
//!
//! # Examples
//!
//! ```
//! use resistat_stats::contingency::ContingencyTable;
//!
//! // rows = [resistant, non-resistant], columns = hospitals
//! let table = ContingencyTable::resistant_2x2("Milad", 60, 68, "Rasul Akram", 46, 50).unwrap();
//! assert_eq!(table.row_totals(), vec![106, 12]);
//! assert_eq!(table.col_totals(), vec![68, 50]);
//! assert_eq!(table.grand_total(), 118);
//! ```

use serde::Serialize;

/// Error constructing a contingency table from invalid counts or labels.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    #[display("table must have at least one row and one column")]
    Empty,
    #[display("all table rows must have the same length")]
    Ragged,
    #[display("label counts do not match the table dimensions")]
    LabelMismatch,
    #[display("resistant count {resistant} exceeds group total {total} for '{group}'")]
    CountExceedsTotal {
        group: String,
        resistant: u64,
        total: u64,
    },
}

/// A row-major grid of non-negative counts with semantic axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Builds a table from row-major cells and per-axis labels.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if the grid is empty, ragged, or the label
    /// counts do not match the grid dimensions.
    pub fn new<S>(row_labels: &[S], col_labels: &[S], cells: Vec<Vec<u64>>) -> Result<Self, TableError>
    where
        S: AsRef<str>,
    {
        let Some(first_row) = cells.first() else {
            return Err(TableError::Empty);
        };
        let num_cols = first_row.len();
        if num_cols == 0 {
            return Err(TableError::Empty);
        }
        if cells.iter().any(|row| row.len() != num_cols) {
            return Err(TableError::Ragged);
        }
        if row_labels.len() != cells.len() || col_labels.len() != num_cols {
            return Err(TableError::LabelMismatch);
        }

        Ok(Self {
            row_labels: row_labels.iter().map(|l| l.as_ref().to_owned()).collect(),
            col_labels: col_labels.iter().map(|l| l.as_ref().to_owned()).collect(),
            cells,
        })
    }

    /// Builds the 2x2 resistant/non-resistant table for two groups.
    ///
    /// Rows are `[resistant, non-resistant]`, columns are the two groups;
    /// non-resistant is derived as `total - resistant` per group.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::CountExceedsTotal`] if a resistant count
    /// exceeds its group total.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistat_stats::contingency::ContingencyTable;
    ///
    /// let table = ContingencyTable::resistant_2x2("Milad", 66, 68, "Rasul Akram", 49, 50).unwrap();
    /// assert_eq!(table.cell(0, 0), 66);
    /// assert_eq!(table.cell(1, 0), 2);
    /// assert_eq!(table.cell(1, 1), 1);
    /// ```
    pub fn resistant_2x2(
        label_a: &str,
        resistant_a: u64,
        total_a: u64,
        label_b: &str,
        resistant_b: u64,
        total_b: u64,
    ) -> Result<Self, TableError> {
        for (group, resistant, total) in [
            (label_a, resistant_a, total_a),
            (label_b, resistant_b, total_b),
        ] {
            if resistant > total {
                return Err(TableError::CountExceedsTotal {
                    group: group.to_owned(),
                    resistant,
                    total,
                });
            }
        }

        Self::new(
            &["resistant", "non-resistant"],
            &[label_a, label_b],
            vec![
                vec![resistant_a, resistant_b],
                vec![total_a - resistant_a, total_b - resistant_b],
            ],
        )
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cells[0].len()
    }

    /// The count at row `row`, column `col`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u64 {
        self.cells[row][col]
    }

    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    #[must_use]
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Sum of each row across all columns.
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.cells.iter().map(|row| row.iter().sum()).collect()
    }

    /// Sum of each column across all rows.
    #[must_use]
    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.num_cols())
            .map(|col| self.cells.iter().map(|row| row[col]).sum())
            .collect()
    }

    /// Sum of all cells.
    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// The same table with rows and columns swapped.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let cells = (0..self.num_cols())
            .map(|col| self.cells.iter().map(|row| row[col]).collect())
            .collect();
        Self {
            row_labels: self.col_labels.clone(),
            col_labels: self.row_labels.clone(),
            cells,
        }
    }
}
