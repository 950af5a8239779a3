//! Sing-frequency bar chart
//!
//! One bar per hymn, most sung first, labelled with the hymn title. Written
//! as SVG so rendering needs no system fonts or image libraries.

use hymnal_common::analytics::HistoryReport;
use hymnal_common::{Error, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

pub fn render_svg(report: &HistoryReport, path: &Path, width: u32, height: u32) -> Result<()> {
    if report.is_empty() {
        return Err(Error::Report("history is empty, nothing to chart".to_string()));
    }

    let bars = report.rows.len() as u32;
    let top = report.max_count() as u32 + 1;
    let labels: Vec<&str> = report.rows.iter().map(|r| r.title.as_str()).collect();

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(report_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Hymns sung", ("sans-serif", 30))
        .margin(20)
        // Titles are drawn vertically under the bars and need most of the height
        .x_label_area_size(height / 2)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..bars).into_segmented(), 0u32..top)
        .map_err(report_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars as usize)
        .x_label_formatter(&|v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_desc("Times sung")
        .draw()
        .map_err(report_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(3)
                .data(report.rows.iter().enumerate().map(|(i, r)| (i as u32, r.count as u32))),
        )
        .map_err(report_error)?;

    root.present().map_err(report_error)?;
    info!("Wrote chart of {} hymns to {}", bars, path.display());
    Ok(())
}

fn report_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Report(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hymnal_common::analytics::ReportRow;
    use tempfile::TempDir;

    fn row(number: &str, title: &str, count: usize) -> ReportRow {
        ReportRow {
            number: number.to_string(),
            title: title.to_string(),
            count,
        }
    }

    #[test]
    fn test_renders_svg_with_titles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.svg");
        let report = HistoryReport {
            rows: vec![row("1", "Amazing Grace", 3), row("3", "How Great Thou Art", 1)],
        };

        render_svg(&report, &path, 800, 600).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Amazing Grace"));
    }

    #[test]
    fn test_empty_report_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.svg");
        let result = render_svg(&HistoryReport::default(), &path, 800, 600);
        assert!(matches!(result, Err(Error::Report(_))));
        assert!(!path.exists());
    }
}
