//! Computation of the study report consumed by all reporting sinks.

use resistat_stats::{
    chi_square::{ChiSquareOutcome, LabeledOutcome, batch_resistant_2x2, chi_square_test},
    contingency::{ContingencyTable, TableError},
    descriptive::{SummaryExtrema, percent_of_total},
};
use resistat_study::{ColistinCounts, ResistanceRecord, StudyData};
use serde::Serialize;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ReportError {
    #[display("failed to build a contingency table: {_0}")]
    Table(#[from] TableError),
    #[display("the study contains no antibiotic records")]
    EmptyProfile,
}

/// One antibiotic's line in the overall resistance profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntibioticSummary {
    pub antibiotic: String,
    pub resistant: u64,
    pub intermediate: u64,
    pub susceptible: u64,
    pub percent_resistant: f64,
}

impl AntibioticSummary {
    fn from_record(record: &ResistanceRecord, percent_resistant: f64) -> Self {
        Self {
            antibiotic: record.antibiotic.clone(),
            resistant: record.resistant,
            intermediate: record.intermediate,
            susceptible: record.susceptible(),
            percent_resistant,
        }
    }
}

/// Colistin counts with their percentage share, in S/I/R order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColistinSummary {
    pub counts: ColistinCounts,
    /// Percent of isolates per category, aligned with [`ColistinCounts::as_row`].
    pub percents: Vec<f64>,
}

/// Everything the reporting sinks consume, computed up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    pub total_isolates: u64,
    pub profile: Vec<AntibioticSummary>,
    pub extrema: SummaryExtrema,
    pub colistin: ColistinSummary,
    /// One outcome per antibiotic, in tested order.
    pub hospital_comparisons: Vec<LabeledOutcome>,
    /// Hospitals vs. colistin S/I/R categories (2x3 table).
    pub colistin_comparison: ChiSquareOutcome,
    /// Hospitals vs. sequence types (2x7 table).
    pub sequence_type_comparison: ChiSquareOutcome,
}

impl StudyReport {
    /// Runs the full pipeline over the study data.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the dataset is empty or a contingency
    /// table cannot be built from it; both indicate malformed input data,
    /// not a statistical edge case. Comparisons whose chi-square test is
    /// undefined are reported as [`ChiSquareOutcome::Undefined`], never as
    /// errors.
    pub fn compute(data: &StudyData) -> Result<Self, ReportError> {
        let labels = data.antibiotic_names();
        let resistant_overall: Vec<u64> = data.overall.iter().map(|r| r.resistant).collect();
        let percentages = percent_of_total(&resistant_overall, data.total_isolates);

        let profile = data
            .overall
            .iter()
            .zip(&percentages)
            .map(|(record, &percent)| AntibioticSummary::from_record(record, percent))
            .collect();

        let extrema =
            SummaryExtrema::from_labeled(&labels, &percentages).ok_or(ReportError::EmptyProfile)?;

        let colistin = ColistinSummary {
            counts: data.colistin.overall,
            percents: percent_of_total(
                &data.colistin.overall.as_row(),
                data.colistin.overall.total(),
            ),
        };

        let [milad, rasul] = &data.hospitals;
        let hospital_comparisons = batch_resistant_2x2(
            &milad.name,
            &milad.resistant_counts(),
            &rasul.name,
            &rasul.resistant_counts(),
            &labels,
        )?;

        let hospital_names = [milad.name.as_str(), rasul.name.as_str()];
        let colistin_table = ContingencyTable::new(
            &hospital_names,
            &["Susceptible", "Intermediate", "Resistant"],
            data.colistin
                .by_hospital
                .iter()
                .map(ColistinCounts::as_row)
                .collect(),
        )?;
        let colistin_comparison = chi_square_test(&colistin_table);

        let st_categories: Vec<&str> = data
            .sequence_types
            .categories
            .iter()
            .map(String::as_str)
            .collect();
        let st_table = ContingencyTable::new(
            &hospital_names,
            &st_categories,
            data.sequence_types.by_hospital.to_vec(),
        )?;
        let sequence_type_comparison = chi_square_test(&st_table);

        Ok(Self {
            total_isolates: data.total_isolates,
            profile,
            extrema,
            colistin,
            hospital_comparisons,
            colistin_comparison,
            sequence_type_comparison,
        })
    }
}
