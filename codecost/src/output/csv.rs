use std::fs::File;
use std::io::{self, BufWriter, Write as _};
use std::path::Path;

use codecost_core::FileReport;

/// Column order is part of the contract with downstream consumers; keep
/// it in sync with the table renderer.
const HEADER: &str = "file,loc,effective_loc,function_count,total_complexity,max_complexity,\
size_bytes,elapsed_seconds,peak_memory_bytes,watts,joules";

pub(crate) fn export(reports: &[FileReport], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{HEADER}")?;
    for r in reports {
        writeln!(
            w,
            "{},{},{},{},{},{},{},{:.2},{},{:.2},{:.2}",
            escape(&r.path.display().to_string()),
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
        )?;
    }

    w.flush()
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codecost_core::{ResourceProfile, StaticMetrics};
    use std::path::PathBuf;

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("plain.py"), "plain.py");
        assert_eq!(escape("with,comma.py"), "\"with,comma.py\"");
        assert_eq!(escape("with\"quote.py"), "\"with\"\"quote.py\"");
    }

    #[test]
    fn export_writes_header_and_rows() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("report.csv");

        let reports = vec![FileReport {
            path: PathBuf::from("demo.sh"),
            line_count: 3,
            size_bytes: 20,
            static_metrics: StaticMetrics {
                total_complexity: 2,
                max_function_complexity: 2,
                function_count: 1,
                effective_lines: 3,
            },
            profile: ResourceProfile {
                elapsed_seconds: 0.12,
                peak_memory_bytes: 2048,
                average_cpu_percent: 1.0,
                power_watts: 0.8,
                energy_joules: 0.096,
            },
        }];

        export(&reports, &out)?;
        let content = std::fs::read_to_string(&out)?;
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "demo.sh,3,3,1,2,2,20,0.12,2048,0.80,0.10");
        Ok(())
    }
}
