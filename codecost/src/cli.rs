use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("duration cannot be empty (expected e.g. 50ms, 10s, 1m)".to_string());
    }

    let number_end = s
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(s.len(), |(idx, _)| idx);

    if number_end == 0 {
        return Err(format!(
            "invalid duration '{s}' (expected e.g. 50ms, 10s, 1m)"
        ));
    }

    let (number_str, unit_str) = s.split_at(number_end);
    let value: u64 = number_str
        .parse()
        .map_err(|_| format!("invalid duration '{s}' (expected e.g. 50ms, 10s, 1m)"))?;

    match unit_str.trim() {
        "" | "s" | "sec" | "secs" | "second" | "seconds" => Ok(Duration::from_secs(value)),
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => {
            Ok(Duration::from_millis(value))
        }
        "m" | "min" | "mins" | "minute" | "minutes" => {
            let secs = value
                .checked_mul(60)
                .ok_or_else(|| format!("duration '{s}' is too large"))?;
            Ok(Duration::from_secs(secs))
        }
        "h" | "hr" | "hrs" | "hour" | "hours" => {
            let secs = value
                .checked_mul(60)
                .and_then(|v| v.checked_mul(60))
                .ok_or_else(|| format!("duration '{s}' is too large"))?;
            Ok(Duration::from_secs(secs))
        }
        _ => Err(format!(
            "invalid duration '{s}' (expected e.g. 50ms, 10s, 1m)"
        )),
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width comparison table.
    HumanReadable,
    /// Emit the full report as a JSON array to stdout.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "codecost",
    author,
    version,
    about = "Static complexity and runtime resource cost profiler for script trees",
    long_about = "codecost walks a directory tree, runs every recognized script (.py, .js, .sh) under its interpreter while sampling memory and CPU, and reports wall time, peak memory, cyclomatic complexity, and an estimated power/energy cost per file.\n\nScripts are profiled one at a time so runs do not skew each other's readings. The energy figure is a coarse linear model (utilization x cores x watts-per-core), not a hardware measurement.",
    after_help = "Examples:\n  codecost --path ./scripts\n  codecost -p ./scripts --csv results.csv\n  codecost -p ./scripts --plot --timeout 30s\n  codecost -p ./scripts --output json"
)]
pub struct Cli {
    /// Root directory to scan for scripts
    #[arg(long, short = 'p')]
    pub path: PathBuf,

    /// Export the report as CSV to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write a comparison chart alongside the report
    #[arg(long)]
    pub plot: bool,

    /// Where --plot writes the chart
    #[arg(long, default_value = "codecost-report.svg")]
    pub plot_file: PathBuf,

    /// Sampling cadence for runtime profiling (e.g. 50ms)
    #[arg(long, value_parser = parse_duration, default_value = "50ms")]
    pub interval: Duration,

    /// Nominal per-core power draw (watts) used by the energy estimate
    #[arg(long, env = "CODECOST_WATTS_PER_CORE", default_value_t = codecost_core::DEFAULT_WATTS_PER_CORE)]
    pub watts_per_core: f64,

    /// Kill a profiled script that runs longer than this (e.g. 30s);
    /// unbounded when unset
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::HumanReadable)]
    pub output: OutputFormat,
}
