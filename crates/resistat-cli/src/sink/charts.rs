//! Chart rendering of the study report.
//!
//! Produces the two PNG artifacts of the analysis: a bar chart of the
//! percent of isolates resistant to each antibiotic, and a pie chart of the
//! colistin susceptibility distribution.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use plotters::prelude::*;
use resistat_analysis::report::StudyReport;

use crate::sink::ReportSink;

pub const BAR_CHART_FILE: &str = "Resistance_BarChart.png";
pub const PIE_CHART_FILE: &str = "Colistin_PieChart.png";

const CORNFLOWER_BLUE: RGBColor = RGBColor(100, 149, 237);
const MEDIUM_SEA_GREEN: RGBColor = RGBColor(60, 179, 113);
const GOLD: RGBColor = RGBColor(255, 215, 0);
const TOMATO: RGBColor = RGBColor(255, 99, 71);

pub struct ChartSink {
    out_dir: PathBuf,
}

impl ChartSink {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            out_dir: out_dir.to_path_buf(),
        }
    }

    fn draw_bar_chart(&self, report: &StudyReport) -> anyhow::Result<PathBuf> {
        let path = self.out_dir.join(BAR_CHART_FILE);
        let root = BitMapBackend::new(&path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!(
                    "Resistance to each antibiotic (n={} isolates)",
                    report.total_isolates
                ),
                ("sans-serif", 24),
            )
            .margin(10)
            .x_label_area_size(140)
            .y_label_area_size(60)
            .build_cartesian_2d((0..report.profile.len()).into_segmented(), 0.0..105.0_f64)?;

        let names: Vec<&str> = report
            .profile
            .iter()
            .map(|line| line.antibiotic.as_str())
            .collect();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len())
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => {
                    names.get(*idx).map(|s| (*s).to_string()).unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            })
            .x_label_style(("sans-serif", 13).into_font().transform(FontTransform::Rotate90))
            .y_desc("Percent of isolates resistant (%)")
            .axis_desc_style(("sans-serif", 16))
            .draw()?;

        chart.draw_series(report.profile.iter().enumerate().map(|(idx, line)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (SegmentValue::Exact(idx + 1), line.percent_resistant),
                ],
                CORNFLOWER_BLUE.filled(),
            )
        }))?;

        root.present()?;
        Ok(path.clone())
    }

    #[expect(clippy::cast_precision_loss)]
    fn draw_pie_chart(&self, report: &StudyReport) -> anyhow::Result<PathBuf> {
        let path = self.out_dir.join(PIE_CHART_FILE);
        let root = BitMapBackend::new(&path, (640, 640)).into_drawing_area();
        root.fill(&WHITE)?;

        let area = root.titled(
            &format!(
                "Colistin susceptibility distribution (n={} isolates)",
                report.colistin.counts.total()
            ),
            ("sans-serif", 22),
        )?;

        let sizes = [
            report.colistin.counts.susceptible as f64,
            report.colistin.counts.intermediate as f64,
            report.colistin.counts.resistant as f64,
        ];
        let colors = [MEDIUM_SEA_GREEN, GOLD, TOMATO];
        let labels = [
            format!("Susceptible ({:.1}%)", report.colistin.percents[0]),
            format!("Intermediate ({:.1}%)", report.colistin.percents[1]),
            format!("Resistant ({:.1}%)", report.colistin.percents[2]),
        ];

        let center = (320, 330);
        let radius = 200.0;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(270.0);
        pie.label_style(("sans-serif", 18).into_font());
        pie.percentages(("sans-serif", 15).into_font().color(&BLACK));
        area.draw(&pie)?;

        root.present()?;
        Ok(path.clone())
    }
}

impl ReportSink for ChartSink {
    fn emit(&mut self, report: &StudyReport) -> anyhow::Result<()> {
        let bar = self
            .draw_bar_chart(report)
            .context("failed to render the resistance bar chart")?;
        eprintln!("Wrote {}", bar.display());

        let pie = self
            .draw_pie_chart(report)
            .context("failed to render the colistin pie chart")?;
        eprintln!("Wrote {}", pie.display());

        Ok(())
    }
}
