//! Statistical utilities for antimicrobial resistance analysis.
//!
//! This crate provides the numeric core shared by the analysis pipeline:
//!
//! - **Descriptive statistics**: Percentage series and labeled mean/extrema summaries
//! - **Contingency tables**: Small labeled grids of counts with marginal totals
//! - **Chi-square tests**: Pearson's test of independence with a sum-typed outcome
//!
//! # Modules
//!
//! - [`descriptive`]: Percentage derivation and labeled summary extrema
//! - [`contingency`]: Labeled contingency tables and their marginals
//! - [`chi_square`]: Pearson chi-square tests over contingency tables
//!
//! # Examples
//!
//! ## Computing percentages and extrema
//!
//! ```
//! use resistat_stats::descriptive::{SummaryExtrema, percent_of_total};
//!
//! let percentages = percent_of_total(&[118, 45], 118);
//! let summary = SummaryExtrema::from_labeled(&["Meropenem", "Doxycycline"], &percentages).unwrap();
//! assert_eq!(summary.highest.label, "Meropenem");
//! assert_eq!(summary.highest.value, 100.0);
//! ```
//!
//! ## Testing a 2x2 comparison
//!
//! ```
//! use resistat_stats::{chi_square::chi_square_test, contingency::ContingencyTable};
//!
//! let table = ContingencyTable::resistant_2x2("Milad", 60, 68, "Rasul Akram", 46, 50).unwrap();
//! let outcome = chi_square_test(&table);
//! assert!(outcome.is_computed());
//! ```

pub mod chi_square;
pub mod contingency;
pub mod descriptive;
