//! Audit logging for the expense tracker
//!
//! Every create and delete of a transaction is appended to `audit.log` as
//! one JSON line carrying a snapshot of the record.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries to and reads them back from the log file

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
