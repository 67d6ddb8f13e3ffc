//! Console rendering of the study report.

use std::io::{self, Write};

use resistat_analysis::report::StudyReport;
use resistat_stats::chi_square::ChiSquareOutcome;

use crate::sink::ReportSink;

pub struct ConsoleSink<W> {
    writer: W,
}

impl ConsoleSink<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> ReportSink for ConsoleSink<W>
where
    W: Write,
{
    fn emit(&mut self, report: &StudyReport) -> anyhow::Result<()> {
        let w = &mut self.writer;

        writeln!(
            w,
            "Overall resistance profile ({} isolates):",
            report.total_isolates
        )?;
        writeln!(w, "{:<24} {:>4} {:>4} {:>4} {:>7}", "Antibiotic", "R", "I", "S", "R%")?;
        for line in &report.profile {
            writeln!(
                w,
                "{:<24} {:>4} {:>4} {:>4} {:>6.1}%",
                line.antibiotic,
                line.resistant,
                line.intermediate,
                line.susceptible,
                line.percent_resistant
            )?;
        }

        writeln!(w)?;
        writeln!(
            w,
            "Mean percent resistance across drugs: {:.1}%",
            report.extrema.mean
        )?;
        writeln!(
            w,
            "Highest resistance: {} ({:.1}%)",
            report.extrema.highest.label, report.extrema.highest.value
        )?;
        writeln!(
            w,
            "Lowest resistance: {} ({:.1}%)",
            report.extrema.lowest.label, report.extrema.lowest.value
        )?;

        writeln!(w)?;
        let colistin = &report.colistin;
        writeln!(
            w,
            "Colistin susceptibility (n={}): S {} ({:.1}%), I {} ({:.1}%), R {} ({:.1}%)",
            colistin.counts.total(),
            colistin.counts.susceptible,
            colistin.percents[0],
            colistin.counts.intermediate,
            colistin.percents[1],
            colistin.counts.resistant,
            colistin.percents[2],
        )?;

        writeln!(w)?;
        writeln!(w, "Chi-square tests comparing resistance between hospitals:")?;
        for comparison in &report.hospital_comparisons {
            match comparison.outcome {
                ChiSquareOutcome::Computed { p_value, .. } => {
                    writeln!(w, "{}: p = {p_value:.3}", comparison.label)?;
                }
                ChiSquareOutcome::Undefined => {
                    writeln!(
                        w,
                        "{}: cannot compute chi-square (zero expected count)",
                        comparison.label
                    )?;
                }
            }
        }

        writeln!(w)?;
        write_table_outcome(
            w,
            "Colistin susceptibility (2x3 table)",
            report.colistin_comparison,
        )?;
        write_table_outcome(
            w,
            "ST distribution (2x7 table)",
            report.sequence_type_comparison,
        )?;

        Ok(())
    }
}

fn write_table_outcome<W>(w: &mut W, label: &str, outcome: ChiSquareOutcome) -> io::Result<()>
where
    W: Write,
{
    match outcome {
        ChiSquareOutcome::Computed {
            statistic, p_value, ..
        } => writeln!(w, "{label}: chi^2 = {statistic:.3}, p = {p_value:.3}"),
        ChiSquareOutcome::Undefined => {
            writeln!(w, "{label}: cannot compute chi-square (zero expected count)")
        }
    }
}
