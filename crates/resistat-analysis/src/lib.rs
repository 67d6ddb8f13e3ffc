//! Statistical analysis pipeline for the resistance study.
//!
//! This crate ties the fixed study dataset to the generic statistics crate
//! and produces one [`report::StudyReport`] value holding everything the
//! reporting sinks need:
//!
//! 1. **Resistance profile**: per-antibiotic R/I/S counts and resistant %
//! 2. **Summary extrema**: mean resistance plus the most and least resisted drugs
//! 3. **Colistin breakdown**: three-category counts and percentages
//! 4. **Hospital comparisons**: one chi-square outcome per antibiotic
//! 5. **Colistin and sequence-type comparisons**: 2x3 and 2x7 chi-square tests
//!
//! The report is a plain serializable value; rendering (console, charts,
//! JSON) lives downstream and never feeds back into the computation.
//!
//! # Examples
//!
//! ```
//! use resistat_analysis::report::StudyReport;
//! use resistat_study::StudyData;
//!
//! let data = StudyData::load().unwrap();
//! let report = StudyReport::compute(&data).unwrap();
//!
//! assert_eq!(report.profile.len(), 13);
//! assert_eq!(report.extrema.highest.label, "Meropenem");
//! for comparison in &report.hospital_comparisons {
//!     println!("{}: {:?}", comparison.label, comparison.outcome);
//! }
//! ```

pub mod report;
