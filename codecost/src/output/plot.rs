//! Comparison chart: six bar-chart panels (one per metric) in a 3x2
//! grid, written as standalone SVG.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use codecost_core::FileReport;

const PANEL_W: f64 = 640.0;
const PANEL_H: f64 = 340.0;
const PLOT_X: f64 = 50.0;
const PLOT_Y: f64 = 50.0;
const PLOT_W: f64 = 560.0;
const PLOT_H: f64 = 230.0;

pub(crate) fn render_svg(reports: &[FileReport], path: &Path) -> io::Result<()> {
    std::fs::write(path, build_svg(reports))
}

fn build_svg(reports: &[FileReport]) -> String {
    let labels: Vec<String> = reports.iter().map(file_label).collect();

    let panels: [(&str, &str, Vec<f64>); 6] = [
        (
            "Wall time (s)",
            "#4682b4",
            reports.iter().map(|r| r.profile.elapsed_seconds).collect(),
        ),
        (
            "Peak memory (B)",
            "#cd5c5c",
            reports
                .iter()
                .map(|r| r.profile.peak_memory_bytes as f64)
                .collect(),
        ),
        (
            "Total complexity",
            "#2e8b57",
            reports
                .iter()
                .map(|r| r.static_metrics.total_complexity as f64)
                .collect(),
        ),
        (
            "Functions",
            "#ffa500",
            reports
                .iter()
                .map(|r| r.static_metrics.function_count as f64)
                .collect(),
        ),
        (
            "Estimated power (W)",
            "#9370db",
            reports.iter().map(|r| r.profile.power_watts).collect(),
        ),
        (
            "Estimated energy (J)",
            "#008b8b",
            reports.iter().map(|r| r.profile.energy_joules).collect(),
        ),
    ];

    let width = PANEL_W * 2.0;
    let height = PANEL_H * 3.0 + 40.0;

    let mut out = String::new();
    writeln!(
        &mut out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         font-family=\"sans-serif\" font-size=\"12\">"
    )
    .ok();
    writeln!(
        &mut out,
        "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-size=\"18\">codecost comparison</text>",
        width / 2.0
    )
    .ok();

    for (i, (title, color, values)) in panels.iter().enumerate() {
        let x0 = (i % 2) as f64 * PANEL_W;
        let y0 = (i / 2) as f64 * PANEL_H + 40.0;
        draw_panel(&mut out, x0, y0, title, color, &labels, values);
    }

    out.push_str("</svg>\n");
    out
}

fn draw_panel(
    out: &mut String,
    x0: f64,
    y0: f64,
    title: &str,
    color: &str,
    labels: &[String],
    values: &[f64],
) {
    writeln!(
        out,
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\">{title}</text>",
        x0 + PANEL_W / 2.0,
        y0 + 28.0
    )
    .ok();
    writeln!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{PLOT_W}\" height=\"{PLOT_H}\" \
         fill=\"none\" stroke=\"#999\"/>",
        x0 + PLOT_X,
        y0 + PLOT_Y
    )
    .ok();

    if values.is_empty() {
        return;
    }

    let max = values.iter().copied().fold(0.0_f64, f64::max).max(1e-9);
    let slot = PLOT_W / values.len() as f64;
    let bar_w = slot * 0.6;

    for (i, (label, &value)) in labels.iter().zip(values).enumerate() {
        let bar_h = (value / max) * (PLOT_H - 20.0);
        let bx = x0 + PLOT_X + i as f64 * slot + (slot - bar_w) / 2.0;
        let by = y0 + PLOT_Y + PLOT_H - bar_h;

        writeln!(
            out,
            "<rect x=\"{bx:.1}\" y=\"{by:.1}\" width=\"{bar_w:.1}\" height=\"{bar_h:.1}\" \
             fill=\"{color}\"/>"
        )
        .ok();
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\">{}</text>",
            bx + bar_w / 2.0,
            by - 4.0,
            format_value(value)
        )
        .ok();
        writeln!(
            out,
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"10\">{}</text>",
            bx + bar_w / 2.0,
            y0 + PLOT_Y + PLOT_H + 14.0,
            escape_text(label)
        )
        .ok();
    }
}

fn file_label(report: &FileReport) -> String {
    let name = report
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.path.display().to_string());
    if name.chars().count() > 18 {
        let short: String = name.chars().take(16).collect();
        format!("{short}..")
    } else {
        name
    }
}

fn format_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;")
}
