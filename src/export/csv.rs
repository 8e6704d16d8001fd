//! CSV export
//!
//! One header row then one row per transaction. Fields are joined with
//! commas and never quoted, so a description containing a comma shifts the
//! remaining columns of its row.

use std::fmt::Display;
use std::io::Write;

use chrono::TimeZone;
use csv::{QuoteStyle, WriterBuilder};

use crate::error::TrackerResult;
use crate::models::Transaction;

/// Default file name for CSV exports
pub const CSV_FILE_NAME: &str = "transactions.csv";

pub const CSV_HEADER: [&str; 5] = ["Description", "Amount", "Category", "Type", "Date"];

/// Export transactions to CSV
///
/// Amounts are written as absolute values; the sign is carried by the
/// `Type` column. Dates are rendered in `tz` using `date_format`.
pub fn export_transactions_csv<W, Tz>(
    transactions: &[Transaction],
    writer: W,
    date_format: &str,
    tz: &Tz,
) -> TrackerResult<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for txn in transactions {
        let amount = txn.amount.abs().to_decimal_string();
        let date = txn.date.with_timezone(tz).format(date_format).to_string();

        csv_writer.write_record([
            txn.description.as_str(),
            amount.as_str(),
            txn.category.as_str(),
            txn.type_label(),
            date.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    tracing::debug!(rows = transactions.len(), "wrote csv export");
    Ok(())
}
