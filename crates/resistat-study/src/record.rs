use serde::Serialize;

/// Error constructing a record whose counts violate the grouping invariant.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(
    "counts for '{label}' exceed the group total: {resistant} resistant + {intermediate} intermediate > {total} tested"
)]
pub struct InvalidCountsError {
    pub label: String,
    pub resistant: u64,
    pub intermediate: u64,
    pub total: u64,
}

/// Susceptibility counts for one antibiotic within one isolate group.
///
/// The susceptible count is derived, so the invariant
/// `resistant + intermediate + susceptible == total` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResistanceRecord {
    pub antibiotic: String,
    pub resistant: u64,
    pub intermediate: u64,
    pub total: u64,
}

impl ResistanceRecord {
    /// Builds a record, failing fast if the counts exceed the group total.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCountsError`] if `resistant + intermediate > total`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resistat_study::ResistanceRecord;
    ///
    /// let record = ResistanceRecord::new("Cefotaxime", 115, 3, 118).unwrap();
    /// assert_eq!(record.susceptible(), 0);
    ///
    /// assert!(ResistanceRecord::new("Cefotaxime", 118, 3, 118).is_err());
    /// ```
    pub fn new(
        antibiotic: &str,
        resistant: u64,
        intermediate: u64,
        total: u64,
    ) -> Result<Self, InvalidCountsError> {
        if resistant + intermediate > total {
            return Err(InvalidCountsError {
                label: antibiotic.to_owned(),
                resistant,
                intermediate,
                total,
            });
        }
        Ok(Self {
            antibiotic: antibiotic.to_owned(),
            resistant,
            intermediate,
            total,
        })
    }

    /// Isolates neither resistant nor intermediate.
    #[must_use]
    pub fn susceptible(&self) -> u64 {
        self.total - self.resistant - self.intermediate
    }
}

/// Colistin counts for one isolate group, by susceptibility category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColistinCounts {
    pub susceptible: u64,
    pub intermediate: u64,
    pub resistant: u64,
}

impl ColistinCounts {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.susceptible + self.intermediate + self.resistant
    }

    /// Counts in `[S, I, R]` category order.
    #[must_use]
    pub fn as_row(&self) -> Vec<u64> {
        vec![self.susceptible, self.intermediate, self.resistant]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_susceptible_is_derived() {
        let record = ResistanceRecord::new("Doxycycline", 45, 6, 118).unwrap();
        assert_eq!(record.susceptible(), 67);
        assert_eq!(
            record.resistant + record.intermediate + record.susceptible(),
            record.total
        );
    }

    #[test]
    fn test_counts_exceeding_total_rejected() {
        let err = ResistanceRecord::new("Meropenem", 118, 1, 118).unwrap_err();
        assert_eq!(err.total, 118);
        assert!(err.to_string().contains("Meropenem"));
    }

    #[test]
    fn test_fully_resistant_record_is_valid() {
        let record = ResistanceRecord::new("Meropenem", 118, 0, 118).unwrap();
        assert_eq!(record.susceptible(), 0);
    }

    #[test]
    fn test_colistin_row_order() {
        let counts = ColistinCounts {
            susceptible: 108,
            intermediate: 7,
            resistant: 3,
        };
        assert_eq!(counts.total(), 118);
        assert_eq!(counts.as_row(), vec![108, 7, 3]);
    }
}
