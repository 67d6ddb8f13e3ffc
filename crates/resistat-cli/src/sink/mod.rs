//! Reporting sinks consuming the computed study report.
//!
//! The analysis pipeline produces one immutable
//! [`StudyReport`](resistat_analysis::report::StudyReport); sinks render it
//! as console text, chart images, or serialized data without ever feeding
//! back into the computation.

pub mod charts;
pub mod console;

use resistat_analysis::report::StudyReport;

/// A renderer of the computed report.
pub trait ReportSink {
    fn emit(&mut self, report: &StudyReport) -> anyhow::Result<()>;
}
