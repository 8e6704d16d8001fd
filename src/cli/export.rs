//! CLI commands for data export
//!
//! CSV goes to a file (or stdout with `-o -`); the report is written as an
//! HTML file that can be opened in the default browser for printing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::Notification;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{self, ReportOptions, CSV_FILE_NAME, REPORT_FILE_NAME};
use crate::storage::file_io::write_atomic;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all transactions to CSV
    Csv {
        /// Output file path, or "-" for stdout
        #[arg(short, long, default_value = CSV_FILE_NAME)]
        output: PathBuf,
    },

    /// Write a printable HTML report
    Report {
        /// Output file path
        #[arg(short, long, default_value = REPORT_FILE_NAME)]
        output: PathBuf,

        /// Open the report in the default browser
        #[arg(long)]
        open: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Csv { output } => handle_export_csv(storage, settings, &output),
        ExportCommands::Report { output, open } => {
            handle_export_report(storage, settings, &output, open)
        }
    }
}

fn handle_export_csv(storage: &Storage, settings: &Settings, output: &Path) -> TrackerResult<()> {
    let transactions = storage.transactions.get_all()?;

    if output == Path::new("-") {
        let stdout = std::io::stdout();
        export::export_transactions_csv(&transactions, stdout.lock(), &settings.date_format, &Local)?;
    } else {
        let file = File::create(output).map_err(|e| {
            TrackerError::Export(format!("Failed to create file {}: {}", output.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export::export_transactions_csv(&transactions, &mut writer, &settings.date_format, &Local)?;
        writer.flush()?;

        println!(
            "Exported {} transactions to: {}",
            transactions.len(),
            output.display()
        );
    }

    Notification::success("CSV exported successfully!").show();
    Ok(())
}

fn handle_export_report(
    storage: &Storage,
    settings: &Settings,
    output: &Path,
    open: bool,
) -> TrackerResult<()> {
    let transactions = storage.transactions.get_all()?;
    let options = ReportOptions {
        currency_symbol: &settings.currency_symbol,
        date_format: &settings.date_format,
        tz: Local,
    };

    let html = export::render_report(&transactions, &options)?.into_string();
    write_atomic(output, html.as_bytes())?;
    println!("Report written to: {}", output.display());

    if open {
        opener::open(output).map_err(|e| {
            TrackerError::Export(format!("Failed to open {}: {}", output.display(), e))
        })?;
        Notification::success("Report opened for printing").show();
    } else {
        Notification::success("Report exported successfully!").show();
    }

    Ok(())
}
