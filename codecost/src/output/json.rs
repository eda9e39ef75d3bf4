use codecost_core::FileReport;

/// Whole report as one JSON array, flat fields per file (the same shape
/// the CSV export carries).
pub(crate) fn print(reports: &[FileReport]) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), reports)?;
    println!();
    Ok(())
}
