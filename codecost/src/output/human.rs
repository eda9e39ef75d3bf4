use std::fmt::Write as _;

use codecost_core::FileReport;

/// Fixed-width comparison table, one row per file.
pub(crate) fn render(reports: &[FileReport]) -> String {
    let mut out = String::new();

    if reports.is_empty() {
        out.push_str("no scripts found\n");
        return out;
    }

    let header = format!(
        "{:<40}{:>6}{:>8}{:>7}{:>9}{:>8}{:>10}{:>10}{:>12}{:>8}{:>10}",
        "file",
        "loc",
        "ef_loc",
        "funcs",
        "cx_total",
        "cx_max",
        "size(B)",
        "time(s)",
        "mem(B)",
        "watts",
        "joules"
    );
    writeln!(&mut out, "{header}").ok();
    writeln!(&mut out, "{}", "-".repeat(header.len())).ok();

    for r in reports {
        writeln!(
            &mut out,
            "{:<40}{:>6}{:>8}{:>7}{:>9}{:>8}{:>10}{:>10.2}{:>12}{:>8.2}{:>10.2}",
            r.path.display(),
            r.line_count,
            r.static_metrics.effective_lines,
            r.static_metrics.function_count,
            r.static_metrics.total_complexity,
            r.static_metrics.max_function_complexity,
            r.size_bytes,
            r.profile.elapsed_seconds,
            r.profile.peak_memory_bytes,
            r.profile.power_watts,
            r.profile.energy_joules
        )
        .ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codecost_core::{ResourceProfile, StaticMetrics};
    use std::path::PathBuf;

    fn report(path: &str) -> FileReport {
        FileReport {
            path: PathBuf::from(path),
            line_count: 12,
            size_bytes: 340,
            static_metrics: StaticMetrics {
                total_complexity: 5,
                max_function_complexity: 4,
                function_count: 2,
                effective_lines: 9,
            },
            profile: ResourceProfile {
                elapsed_seconds: 1.5,
                peak_memory_bytes: 10_485_760,
                average_cpu_percent: 42.0,
                power_watts: 3.36,
                energy_joules: 5.04,
            },
        }
    }

    #[test]
    fn table_has_header_and_one_row_per_file() {
        let rendered = render(&[report("a.py"), report("b.sh")]);
        let lines: Vec<_> = rendered.lines().collect();

        // header, separator, two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("cx_total"));
        assert!(lines[2].starts_with("a.py"));
        assert!(lines[3].starts_with("b.sh"));
        assert!(lines[2].contains("1.50"));
        assert!(lines[2].contains("5.04"));
    }

    #[test]
    fn empty_report_says_so() {
        assert_eq!(render(&[]), "no scripts found\n");
    }
}
