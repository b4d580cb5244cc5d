//! CSV export for the action log and hourly power history.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::home::history::HOURS_PER_DAY;
use crate::home::journal::ActionEntry;

/// Column header for action-log CSV export.
const LOG_HEADER: &str = "time,device,action,user";

/// Column header for hourly-history CSV export.
const HISTORY_HEADER: &str = "hour,power_w";

/// Exports the action log to a CSV file at the given path.
///
/// Writes a header row followed by one row per entry, newest first, the
/// same order the ledger renders in. Produces deterministic output for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_log_csv(entries: &[ActionEntry], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_log_csv(entries, buf)
}

/// Writes the action log as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_log_csv(entries: &[ActionEntry], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(LOG_HEADER.split(','))?;

    for e in entries {
        wtr.write_record(&[
            e.time.clone(),
            e.device.to_string(),
            e.action.clone(),
            e.user.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the 24-slot hourly history to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_history_csv(history_w: &[f32; HOURS_PER_DAY], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_history_csv(history_w, buf)
}

/// Writes the hourly history as CSV to any writer, one row per hour.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_history_csv(history_w: &[f32; HOURS_PER_DAY], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HISTORY_HEADER.split(','))?;

    for (hour, power_w) in history_w.iter().enumerate() {
        wtr.write_record(&[hour.to_string(), format!("{power_w:.1}")])?;
    }

    wtr.flush()?;
    Ok(())
}
