// JSON report output.
//
// Serializes the same AnalysisReport the terminal view renders, so tooling
// can consume a run without scraping console text. Scores are written
// unrounded.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::pipeline::analysis::AnalysisReport;

/// Write `report` as pretty-printed JSON to `dest`, or to stdout when `dest`
/// is `-`.
pub fn write_report(report: &AnalysisReport, dest: &Path) -> Result<()> {
    if dest == Path::new("-") {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        write_to(report, &mut lock)?;
        return Ok(());
    }

    let file = File::create(dest)
        .with_context(|| format!("Failed to create report file {}", dest.display()))?;
    let mut writer = BufWriter::new(file);
    write_to(report, &mut writer)?;
    writer.flush().context("Failed to flush report file")?;

    info!(path = %dest.display(), "Wrote JSON report");
    Ok(())
}

/// Serialize `report` into any writer, followed by a newline.
pub fn write_to<W: Write>(report: &AnalysisReport, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report).context("Failed to serialize report")?;
    writeln!(writer).context("Failed to write report")?;
    Ok(())
}
