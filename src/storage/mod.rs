//! Storage layer for the expense tracker
//!
//! A local key-value store (one JSON file per key) with atomic writes, the
//! transaction repository on top of it, and the audit hooks used by the
//! service layer.

pub mod file_io;
pub mod local;
pub mod transactions;

pub use local::LocalStorage;
pub use transactions::{LoadStatus, TransactionRepository, TRANSACTIONS_KEY};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Transaction;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: TransactionRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(LocalStorage::new(paths.data_dir())),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk, recovering from unreadable data
    pub fn load_all(&self) -> LoadStatus {
        self.transactions.load_or_recover()
    }

    /// Record a newly created transaction in the audit log
    pub fn log_create(&self, txn: &Transaction) -> Result<(), TrackerError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(txn)),
            None => Ok(()),
        }
    }

    /// Record a deleted transaction in the audit log
    pub fn log_delete(&self, txn: &Transaction) -> Result<(), TrackerError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(txn)),
            None => Ok(()),
        }
    }
}
