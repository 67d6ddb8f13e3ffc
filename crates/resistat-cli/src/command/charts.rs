use std::path::PathBuf;

use crate::sink::{ReportSink as _, charts::ChartSink};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ChartsArg {
    /// Directory the chart images are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Default for ChartsArg {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }
}

pub(crate) fn run(arg: &ChartsArg) -> anyhow::Result<()> {
    let report = super::compute_report()?;
    ChartSink::new(&arg.out_dir).emit(&report)
}
