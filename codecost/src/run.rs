use anyhow::{Context, Result};
use codecost_core::{FileReport, PowerModel, ProfileConfig, analyze_file, discover_scripts};

use crate::cli::{Cli, OutputFormat};
use crate::output;

pub fn run(cli: Cli) -> Result<()> {
    anyhow::ensure!(
        cli.path.is_dir(),
        "not a directory: {}",
        cli.path.display()
    );

    let config = ProfileConfig {
        cadence: cli.interval,
        power: PowerModel {
            watts_per_core: cli.watts_per_core,
            ..PowerModel::default()
        },
        timeout: cli.timeout,
        ..ProfileConfig::default()
    };

    let scripts =
        discover_scripts(&cli.path).with_context(|| format!("scan {}", cli.path.display()))?;

    // Strictly one at a time: overlapping runs would contend for the
    // same cores and skew each other's readings.
    let reports: Vec<FileReport> = scripts
        .iter()
        .map(|path| analyze_file(path, &config))
        .collect();

    match cli.output {
        OutputFormat::HumanReadable => print!("{}", output::human::render(&reports)),
        OutputFormat::Json => output::json::print(&reports)?,
    }

    if let Some(csv_path) = &cli.csv {
        output::csv::export(&reports, csv_path)
            .with_context(|| format!("write csv {}", csv_path.display()))?;
        println!("results exported to {}", csv_path.display());
    }

    if cli.plot {
        output::plot::render_svg(&reports, &cli.plot_file)
            .with_context(|| format!("write chart {}", cli.plot_file.display()))?;
        println!("chart written to {}", cli.plot_file.display());
    }

    Ok(())
}
