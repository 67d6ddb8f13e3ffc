//! The study's aggregate counts, constructed once as validated records.

use crate::record::{ColistinCounts, InvalidCountsError, ResistanceRecord};

/// Antibiotics in the order they were tested.
const ANTIBIOTICS: [&str; 13] = [
    "Meropenem",
    "Imipenem",
    "Ceftriaxone",
    "Piperacillin-Tazobactam",
    "Ciprofloxacin",
    "Tobramycin",
    "Cefotaxime",
    "Gentamicin",
    "Ceftazidime",
    "Amikacin",
    "Cefepime",
    "TMP-SMX",
    "Doxycycline",
];

const TOTAL_ISOLATES: u64 = 118;
const RESISTANT_OVERALL: [u64; 13] = [118, 118, 118, 118, 118, 118, 115, 114, 114, 106, 99, 99, 45];
const INTERMEDIATE_OVERALL: [u64; 13] = [0, 0, 0, 0, 0, 0, 3, 1, 1, 2, 4, 5, 6];

const MILAD_TOTAL: u64 = 68;
const RESISTANT_MILAD: [u64; 13] = [68, 68, 68, 68, 68, 68, 66, 66, 66, 60, 56, 57, 25];
const SUSCEPTIBLE_MILAD: [u64; 13] = [0, 0, 0, 0, 0, 0, 0, 2, 2, 7, 10, 8, 39];

const RASUL_TOTAL: u64 = 50;
const RESISTANT_RASUL: [u64; 13] = [50, 50, 50, 50, 50, 50, 49, 48, 48, 46, 43, 42, 20];
const SUSCEPTIBLE_RASUL: [u64; 13] = [0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 5, 6, 28];

/// Seven sequence types identified by molecular typing, incl. one novel type.
const SEQUENCE_TYPES: [&str; 7] = ["ST218", "ST451", "ST1417", "ST3374", "ST391", "ST1104", "ST_new"];
const ST_MILAD: [u64; 7] = [2, 2, 1, 1, 0, 0, 1];
const ST_RASUL: [u64; 7] = [1, 1, 0, 0, 1, 1, 0];

/// Per-antibiotic susceptibility counts for one hospital's isolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HospitalProfile {
    pub name: String,
    pub total: u64,
    /// One record per antibiotic, in tested order.
    pub records: Vec<ResistanceRecord>,
}

impl HospitalProfile {
    fn new(
        name: &str,
        total: u64,
        resistant: &[u64; 13],
        susceptible: &[u64; 13],
    ) -> Result<Self, InvalidCountsError> {
        let records = ANTIBIOTICS
            .iter()
            .zip(resistant.iter().zip(susceptible))
            .map(|(antibiotic, (&res, &sus))| {
                // Intermediate counts were not reported per hospital; they
                // are the remainder after resistant and susceptible.
                let intermediate = total
                    .checked_sub(res + sus)
                    .ok_or_else(|| InvalidCountsError {
                        label: (*antibiotic).to_owned(),
                        resistant: res,
                        intermediate: sus,
                        total,
                    })?;
                ResistanceRecord::new(antibiotic, res, intermediate, total)
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            name: name.to_owned(),
            total,
            records,
        })
    }

    /// `(resistant, total)` per antibiotic, the shape batch comparisons take.
    #[must_use]
    pub fn resistant_counts(&self) -> Vec<(u64, u64)> {
        self.records.iter().map(|r| (r.resistant, r.total)).collect()
    }
}

/// Colistin counts overall and per hospital, from CBDE MIC results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColistinData {
    pub overall: ColistinCounts,
    /// Indexed like [`StudyData::hospitals`].
    pub by_hospital: [ColistinCounts; 2],
}

/// Sequence-type counts per hospital, column-aligned with `categories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTypeDistribution {
    pub categories: Vec<String>,
    /// One row of counts per hospital, indexed like [`StudyData::hospitals`].
    pub by_hospital: [Vec<u64>; 2],
}

/// All aggregate counts from the study, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyData {
    pub total_isolates: u64,
    /// Per-antibiotic records across both hospitals, in tested order.
    pub overall: Vec<ResistanceRecord>,
    pub hospitals: [HospitalProfile; 2],
    pub colistin: ColistinData,
    pub sequence_types: SequenceTypeDistribution,
}

impl StudyData {
    /// Constructs the dataset from the study's constants.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCountsError`] if any record's counts exceed its
    /// group total. The shipped constants are well-formed, so this only
    /// fires if they are edited inconsistently.
    pub fn load() -> Result<Self, InvalidCountsError> {
        let overall = ANTIBIOTICS
            .iter()
            .zip(RESISTANT_OVERALL.iter().zip(&INTERMEDIATE_OVERALL))
            .map(|(antibiotic, (&res, &int))| {
                ResistanceRecord::new(antibiotic, res, int, TOTAL_ISOLATES)
            })
            .collect::<Result<_, _>>()?;

        let hospitals = [
            HospitalProfile::new("Milad", MILAD_TOTAL, &RESISTANT_MILAD, &SUSCEPTIBLE_MILAD)?,
            HospitalProfile::new("Rasul Akram", RASUL_TOTAL, &RESISTANT_RASUL, &SUSCEPTIBLE_RASUL)?,
        ];

        let colistin = ColistinData {
            overall: ColistinCounts {
                susceptible: 108,
                intermediate: 7,
                resistant: 3,
            },
            by_hospital: [
                ColistinCounts {
                    susceptible: 62,
                    intermediate: 5,
                    resistant: 1,
                },
                ColistinCounts {
                    susceptible: 46,
                    intermediate: 2,
                    resistant: 2,
                },
            ],
        };

        let sequence_types = SequenceTypeDistribution {
            categories: SEQUENCE_TYPES.iter().map(|&s| s.to_owned()).collect(),
            by_hospital: [ST_MILAD.to_vec(), ST_RASUL.to_vec()],
        };

        Ok(Self {
            total_isolates: TOTAL_ISOLATES,
            overall,
            hospitals,
            colistin,
            sequence_types,
        })
    }

    /// Antibiotic names in tested order.
    #[must_use]
    pub fn antibiotic_names(&self) -> Vec<&str> {
        self.overall.iter().map(|r| r.antibiotic.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_succeeds() {
        let data = StudyData::load().unwrap();
        assert_eq!(data.overall.len(), 13);
        assert_eq!(data.sequence_types.categories.len(), 7);
    }

    #[test]
    fn test_overall_counts_sum_to_total() {
        let data = StudyData::load().unwrap();
        for record in &data.overall {
            assert_eq!(
                record.resistant + record.intermediate + record.susceptible(),
                data.total_isolates,
                "{}",
                record.antibiotic
            );
        }
    }

    #[test]
    fn test_hospital_totals_sum_to_study_total() {
        let data = StudyData::load().unwrap();
        let [milad, rasul] = &data.hospitals;
        assert_eq!(milad.total, 68);
        assert_eq!(rasul.total, 50);
        assert_eq!(milad.total + rasul.total, data.total_isolates);
    }

    #[test]
    fn test_hospital_resistant_counts_sum_to_overall() {
        // Intermediate counts do not reconcile for ceftazidime in the
        // published data, so only the resistant axis is checked here.
        let data = StudyData::load().unwrap();
        let [milad, rasul] = &data.hospitals;
        for ((overall, m), r) in data.overall.iter().zip(&milad.records).zip(&rasul.records) {
            assert_eq!(m.resistant + r.resistant, overall.resistant, "{}", overall.antibiotic);
        }
    }

    #[test]
    fn test_colistin_counts_are_consistent() {
        let data = StudyData::load().unwrap();
        let [milad, rasul] = &data.colistin.by_hospital;
        assert_eq!(data.colistin.overall.total(), data.total_isolates);
        assert_eq!(milad.total(), 68);
        assert_eq!(rasul.total(), 50);
        assert_eq!(
            milad.susceptible + rasul.susceptible,
            data.colistin.overall.susceptible
        );
    }

    #[test]
    fn test_tested_order_is_preserved() {
        let data = StudyData::load().unwrap();
        let names = data.antibiotic_names();
        assert_eq!(names[0], "Meropenem");
        assert_eq!(names[12], "Doxycycline");
    }
}
