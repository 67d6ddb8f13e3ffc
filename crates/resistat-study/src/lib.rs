//! Fixed dataset of one carbapenem-resistant *Acinetobacter baumannii* study.
//!
//! 118 isolates were collected from intensive care units of two Tehran
//! hospitals (Milad, 68 isolates; Rasul Akram, 50) and tested against 13
//! antibiotics. This crate holds those aggregate susceptibility counts as
//! validated, immutable value objects: per-antibiotic resistance records
//! overall and per hospital, the colistin three-category breakdown, and the
//! sequence-type distribution.
//!
//! Nothing here is computed; [`StudyData::load`] constructs the constants
//! once, validating every record's count invariants, and the analysis
//! pipeline consumes the result read-only.
//!
//! # Examples
//!
//! ```
//! use resistat_study::StudyData;
//!
//! let data = StudyData::load().unwrap();
//! assert_eq!(data.total_isolates, 118);
//! assert_eq!(data.overall.len(), 13);
//! assert_eq!(data.hospitals[0].name, "Milad");
//! ```

pub use self::{dataset::*, record::*};

mod dataset;
mod record;
