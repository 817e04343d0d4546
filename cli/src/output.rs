//! Result rendering

use imc_calculator_shared::BmiReport;
use std::io::{self, Write};

use crate::config::OutputFormat;

/// Write one report line in the requested format
pub fn write_report<W: Write>(out: &mut W, report: &BmiReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report.to_json())?;
            writeln!(out)?;
        }
    }
    out.flush()
}
