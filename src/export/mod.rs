//! Export module for the expense tracker
//!
//! - CSV: the transaction list as unquoted comma-separated rows
//! - HTML: a printable report with summary totals

pub mod csv;
pub mod html;

pub use self::csv::{export_transactions_csv, CSV_FILE_NAME, CSV_HEADER};
pub use self::html::{render_report, ReportOptions, REPORT_FILE_NAME, REPORT_TITLE};
