//! Audit history command

use crate::display::Notification;
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> TrackerResult<()> {
    let entries = match storage.audit_logger() {
        Some(logger) => logger.read_recent(limit)?,
        None => {
            Notification::info("Audit logging is disabled").show();
            return Ok(());
        }
    };

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
