//! Pearson chi-square tests of independence.
//!
//! The test statistic is computed from a contingency table's marginals
//! without Yates continuity correction: `expected[i][j] = row_i * col_j / n`,
//! `chi2 = sum((observed - expected)^2 / expected)`, with
//! `df = (rows - 1) * (cols - 1)` degrees of freedom. The p-value is the
//! upper tail of the chi-square distribution at that statistic, i.e. the
//! regularized upper incomplete gamma function `Q(df / 2, chi2 / 2)`.
//!
//! When any row or column marginal is zero, some expected cell is zero and
//! the statistic is undefined. That case is modeled as an explicit
//! [`ChiSquareOutcome::Undefined`] variant rather than an error or a NaN, so
//! a batch of comparisons can carry on past comparisons that cannot be
//! computed. A zero *observed* cell whose marginals are nonzero is fine.
//!
//! # Examples
//!
//! ```
//! use resistat_stats::{
//!     chi_square::{ChiSquareOutcome, chi_square_test},
//!     contingency::ContingencyTable,
//! };
//!
//! let table = ContingencyTable::new(
//!     &["Milad", "Rasul Akram"],
//!     &["S", "I", "R"],
//!     vec![vec![62, 5, 1], vec![46, 2, 2]],
//! )
//! .unwrap();
//!
//! match chi_square_test(&table) {
//!     ChiSquareOutcome::Computed { statistic, p_value, df } => {
//!         assert_eq!(df, 2);
//!         assert!((0.0..=1.0).contains(&p_value));
//!         assert!(statistic > 0.0);
//!     }
//!     ChiSquareOutcome::Undefined => unreachable!("all marginals are nonzero"),
//! }
//! ```

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::contingency::{ContingencyTable, TableError};

/// Outcome of a chi-square test on one contingency table.
///
/// `Undefined` means a zero expected cell (a zero row or column marginal)
/// made the test impossible for this table; callers must handle both
/// branches explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum ChiSquareOutcome {
    Computed {
        statistic: f64,
        p_value: f64,
        df: usize,
    },
    Undefined,
}

/// A chi-square outcome tagged with the comparison it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledOutcome {
    pub label: String,
    pub outcome: ChiSquareOutcome,
}

/// Runs Pearson's chi-square test of independence on a contingency table.
///
/// Returns [`ChiSquareOutcome::Undefined`] when the table has fewer than two
/// rows or columns, or when any row or column marginal is zero; the test
/// never panics and never produces NaN.
///
/// # Examples
///
/// ```
/// use resistat_stats::{chi_square::chi_square_test, contingency::ContingencyTable};
///
/// // Both groups fully resistant: the non-resistant row is all zero.
/// let table = ContingencyTable::resistant_2x2("Milad", 68, 68, "Rasul Akram", 50, 50).unwrap();
/// assert!(chi_square_test(&table).is_undefined());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn chi_square_test(table: &ContingencyTable) -> ChiSquareOutcome {
    let rows = table.num_rows();
    let cols = table.num_cols();
    if rows < 2 || cols < 2 {
        return ChiSquareOutcome::Undefined;
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    if row_totals.iter().chain(&col_totals).any(|&t| t == 0) {
        return ChiSquareOutcome::Undefined;
    }

    let grand_total = table.grand_total() as f64;
    let mut statistic = 0.0;
    for (i, &row_total) in row_totals.iter().enumerate() {
        for (j, &col_total) in col_totals.iter().enumerate() {
            let expected = row_total as f64 * col_total as f64 / grand_total;
            let observed = table.cell(i, j) as f64;
            statistic += (observed - expected).powi(2) / expected;
        }
    }

    let df = (rows - 1) * (cols - 1);
    let p_value = if statistic <= 0.0 {
        1.0
    } else {
        let Ok(dist) = ChiSquared::new(df as f64) else {
            return ChiSquareOutcome::Undefined;
        };
        dist.sf(statistic)
    };

    ChiSquareOutcome::Computed {
        statistic,
        p_value,
        df,
    }
}

/// Runs a 2x2 resistant/non-resistant comparison per labeled item.
///
/// Each item builds its table via [`ContingencyTable::resistant_2x2`] and
/// tests it independently; an `Undefined` outcome for one item does not
/// abort the batch, and output order matches input order.
///
/// # Arguments
///
/// * `label_a`, `counts_a` - First group name and `(resistant, total)` per item
/// * `label_b`, `counts_b` - Second group name and `(resistant, total)` per item
/// * `labels` - One comparison label per item
///
/// # Errors
///
/// Returns [`TableError`] if any item's resistant count exceeds its total;
/// invalid counts fail the whole batch fast, unlike undefined tests.
///
/// # Panics
///
/// Panics if the three slices have different lengths.
pub fn batch_resistant_2x2(
    label_a: &str,
    counts_a: &[(u64, u64)],
    label_b: &str,
    counts_b: &[(u64, u64)],
    labels: &[&str],
) -> Result<Vec<LabeledOutcome>, TableError> {
    assert!(
        labels.len() == counts_a.len() && labels.len() == counts_b.len(),
        "each label needs counts for both groups"
    );

    labels
        .iter()
        .zip(counts_a.iter().zip(counts_b))
        .map(|(&label, (&(res_a, total_a), &(res_b, total_b)))| {
            let table =
                ContingencyTable::resistant_2x2(label_a, res_a, total_a, label_b, res_b, total_b)?;
            Ok(LabeledOutcome {
                label: label.to_owned(),
                outcome: chi_square_test(&table),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colistin_table() -> ContingencyTable {
        ContingencyTable::new(
            &["Milad", "Rasul Akram"],
            &["S", "I", "R"],
            vec![vec![62, 5, 1], vec![46, 2, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_zero_row_marginal_is_undefined() {
        // Both groups fully resistant: non-resistant row totals zero
        let table = ContingencyTable::resistant_2x2("Milad", 68, 68, "Rasul Akram", 50, 50).unwrap();
        assert_eq!(chi_square_test(&table), ChiSquareOutcome::Undefined);
    }

    #[test]
    fn test_zero_col_marginal_is_undefined() {
        let table = ContingencyTable::new(
            &["resistant", "non-resistant"],
            &["a", "b"],
            vec![vec![10, 0], vec![5, 0]],
        )
        .unwrap();
        assert_eq!(chi_square_test(&table), ChiSquareOutcome::Undefined);
    }

    #[test]
    fn test_single_row_is_undefined() {
        let table = ContingencyTable::new(&["only"], &["a", "b"], vec![vec![3, 4]]).unwrap();
        assert!(chi_square_test(&table).is_undefined());
    }

    #[test]
    fn test_colistin_table_matches_pearson_formula() {
        let ChiSquareOutcome::Computed {
            statistic,
            p_value,
            df,
        } = chi_square_test(&colistin_table())
        else {
            panic!("colistin table has nonzero marginals");
        };

        assert_eq!(df, 2);
        assert!((statistic - 1.2733).abs() < 1e-3);
        // For df = 2 the survival function is exactly exp(-x / 2)
        assert!((p_value - (-statistic / 2.0).exp()).abs() < 1e-9);
        assert!((p_value - 0.5291).abs() < 1e-3);
    }

    #[test]
    fn test_transposition_symmetry() {
        let table = colistin_table();
        assert_eq!(chi_square_test(&table), chi_square_test(&table.transposed()));
    }

    #[test]
    fn test_zero_observed_cell_with_nonzero_marginals_is_computed() {
        // Sequence-type distribution: several zero cells, all marginals nonzero
        let table = ContingencyTable::new(
            &["Milad", "Rasul Akram"],
            &["ST218", "ST451", "ST1417", "ST3374", "ST391", "ST1104", "ST_new"],
            vec![vec![2, 2, 1, 1, 0, 0, 1], vec![1, 1, 0, 0, 1, 1, 0]],
        )
        .unwrap();

        let ChiSquareOutcome::Computed {
            statistic,
            p_value,
            df,
        } = chi_square_test(&table)
        else {
            panic!("zero observed cells must not make the test undefined");
        };

        assert_eq!(df, 6);
        assert!((statistic - 5.2381).abs() < 1e-3);
        assert!((p_value - 0.5137).abs() < 1e-3);
    }

    #[test]
    fn test_identical_proportions_give_p_one() {
        let table = ContingencyTable::new(
            &["resistant", "non-resistant"],
            &["a", "b"],
            vec![vec![30, 30], vec![30, 30]],
        )
        .unwrap();

        let ChiSquareOutcome::Computed { statistic, p_value, .. } = chi_square_test(&table) else {
            panic!("all marginals are nonzero");
        };
        assert_eq!(statistic, 0.0);
        assert_eq!(p_value, 1.0);
    }

    #[test]
    fn test_p_value_decreases_as_statistic_grows() {
        // Widen the gap between group proportions; chi2 grows, p shrinks
        let mut last: Option<(f64, f64)> = None;
        for resistant_b in [40_u64, 30, 20, 10] {
            let table =
                ContingencyTable::resistant_2x2("a", 40, 50, "b", resistant_b, 50).unwrap();
            let ChiSquareOutcome::Computed { statistic, p_value, .. } = chi_square_test(&table)
            else {
                panic!("all marginals are nonzero");
            };
            assert!((0.0..=1.0).contains(&p_value));
            if let Some((prev_stat, prev_p)) = last {
                assert!(statistic > prev_stat);
                assert!(p_value < prev_p);
            }
            last = Some((statistic, p_value));
        }
    }

    #[test]
    fn test_batch_preserves_order_and_isolates_failures() {
        let labels = ["Meropenem", "Gentamicin", "Amikacin"];
        let counts_a = [(68, 68), (66, 68), (60, 68)];
        let counts_b = [(50, 50), (48, 50), (46, 50)];

        let results = batch_resistant_2x2("Milad", &counts_a, "Rasul Akram", &counts_b, &labels)
            .unwrap();

        let result_labels: Vec<_> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(result_labels, labels);
        assert!(results[0].outcome.is_undefined());
        assert!(results[1].outcome.is_computed());
        assert!(results[2].outcome.is_computed());
    }

    #[test]
    fn test_batch_rejects_invalid_counts() {
        let err = batch_resistant_2x2("a", &[(9, 8)], "b", &[(1, 8)], &["bad"]);
        assert!(err.is_err());
    }
}
