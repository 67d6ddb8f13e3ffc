//! Percentage derivation and labeled summary extrema.
//!
//! These functions summarize a series of counts sharing one denominator:
//! the percentage each count represents, the arithmetic mean of those
//! percentages, and which labels carry the highest and lowest values.

use serde::Serialize;

/// A value paired with the label of the series element it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

/// Mean and argmax/argmin summary of a labeled value series.
///
/// Ties are broken by input order: the first occurrence of the extreme
/// value wins, so the summary is stable for repeated values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryExtrema {
    /// Arithmetic mean of all values.
    pub mean: f64,
    /// Label and value of the maximum (first occurrence on ties).
    pub highest: LabeledValue,
    /// Label and value of the minimum (first occurrence on ties).
    pub lowest: LabeledValue,
}

impl SummaryExtrema {
    /// Summarizes a labeled value series.
    ///
    /// # Arguments
    ///
    /// * `labels` - One label per value, in series order
    /// * `values` - The values to summarize
    ///
    /// # Returns
    ///
    /// * `Some(SummaryExtrema)` - if the series contains at least one value
    /// * `None` - if the series is empty
    ///
    /// # Panics
    ///
    /// Panics if `labels` and `values` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistat_stats::descriptive::SummaryExtrema;
    ///
    /// let labels = ["Amikacin", "Cefepime", "Doxycycline"];
    /// let values = [89.8, 83.9, 38.1];
    /// let summary = SummaryExtrema::from_labeled(&labels, &values).unwrap();
    /// assert_eq!(summary.highest.label, "Amikacin");
    /// assert_eq!(summary.lowest.label, "Doxycycline");
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_labeled(labels: &[&str], values: &[f64]) -> Option<Self> {
        assert_eq!(
            labels.len(),
            values.len(),
            "labels and values must have the same length"
        );

        let first = *values.first()?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let mut highest = (0, first);
        let mut lowest = (0, first);
        for (idx, &value) in values.iter().enumerate().skip(1) {
            // Strict comparisons keep the first occurrence on ties
            if value > highest.1 {
                highest = (idx, value);
            }
            if value < lowest.1 {
                lowest = (idx, value);
            }
        }

        Some(Self {
            mean,
            highest: LabeledValue {
                label: labels[highest.0].to_owned(),
                value: highest.1,
            },
            lowest: LabeledValue {
                label: labels[lowest.0].to_owned(),
                value: lowest.1,
            },
        })
    }
}

/// Computes the percentage each count represents of a shared total.
///
/// # Arguments
///
/// * `counts` - Counts to convert, each in `0..=total`
/// * `total` - The shared denominator
///
/// # Panics
///
/// Panics if `total` is zero or any count exceeds `total`.
///
/// # Examples
///
/// ```
/// use resistat_stats::descriptive::percent_of_total;
///
/// let percentages = percent_of_total(&[118, 59, 0], 118);
/// assert_eq!(percentages, vec![100.0, 50.0, 0.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn percent_of_total(counts: &[u64], total: u64) -> Vec<f64> {
    assert!(total > 0, "total must be positive");
    assert!(
        counts.iter().all(|&c| c <= total),
        "counts must not exceed the total"
    );

    counts
        .iter()
        .map(|&c| c as f64 / total as f64 * 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_total_full_resistance() {
        let percentages = percent_of_total(&[118], 118);
        assert_eq!(percentages, vec![100.0]);

        let summary = SummaryExtrema::from_labeled(&["Meropenem"], &percentages).unwrap();
        assert_eq!(summary.mean, 100.0);
        assert_eq!(summary.highest.value, 100.0);
        assert_eq!(summary.lowest.value, 100.0);
    }

    #[test]
    fn test_percent_of_total_in_range() {
        let counts = [118, 115, 114, 106, 99, 45, 0];
        let percentages = percent_of_total(&counts, 118);
        assert_eq!(percentages.len(), counts.len());
        for p in percentages {
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    #[should_panic(expected = "total must be positive")]
    fn test_percent_of_total_zero_total() {
        let _ = percent_of_total(&[0], 0);
    }

    #[test]
    #[should_panic(expected = "counts must not exceed the total")]
    fn test_percent_of_total_count_exceeds_total() {
        let _ = percent_of_total(&[119], 118);
    }

    #[test]
    fn test_extrema_empty_series() {
        assert!(SummaryExtrema::from_labeled(&[], &[]).is_none());
    }

    #[test]
    fn test_extrema_first_occurrence_wins_ties() {
        let labels = ["Meropenem", "Imipenem", "Ceftriaxone", "Doxycycline"];
        let values = [100.0, 100.0, 100.0, 38.1];
        let summary = SummaryExtrema::from_labeled(&labels, &values).unwrap();
        assert_eq!(summary.highest.label, "Meropenem");
        assert_eq!(summary.lowest.label, "Doxycycline");
    }

    #[test]
    fn test_extrema_tied_minimum_is_stable() {
        let labels = ["a", "b", "c"];
        let values = [5.0, 1.0, 1.0];
        let summary = SummaryExtrema::from_labeled(&labels, &values).unwrap();
        assert_eq!(summary.lowest.label, "b");
    }

    #[test]
    fn test_extrema_mean() {
        let labels = ["a", "b", "c", "d"];
        let values = [10.0, 20.0, 30.0, 40.0];
        let summary = SummaryExtrema::from_labeled(&labels, &values).unwrap();
        assert!((summary.mean - 25.0).abs() < 1e-12);
    }
}
