use anyhow::Context as _;
use clap::{Parser, Subcommand};
use resistat_analysis::report::StudyReport;
use resistat_study::StudyData;

use self::{charts::ChartsArg, export::ExportArg};

mod charts;
mod export;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which part of the analysis to run
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the console report only
    Report,
    /// Render the two summary chart images only
    Charts(#[clap(flatten)] ChartsArg),
    /// Write the computed report as JSON
    Export(#[clap(flatten)] ExportArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        // A bare invocation reproduces the full original pipeline:
        // console report plus both charts in the working directory.
        None => {
            report::run()?;
            charts::run(&ChartsArg::default())?;
        }
        Some(Mode::Report) => report::run()?,
        Some(Mode::Charts(arg)) => charts::run(&arg)?,
        Some(Mode::Export(arg)) => export::run(&arg)?,
    }
    Ok(())
}

/// Loads the study constants and runs the analysis pipeline.
fn compute_report() -> anyhow::Result<StudyReport> {
    let data = StudyData::load().context("study constants failed validation")?;
    StudyReport::compute(&data).context("failed to compute the study report")
}
