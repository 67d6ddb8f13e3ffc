use crate::sink::{ReportSink as _, console::ConsoleSink};

pub(crate) fn run() -> anyhow::Result<()> {
    let report = super::compute_report()?;
    ConsoleSink::stdout().emit(&report)
}
