//! Transaction repository backed by the local key-value store
//!
//! The whole list lives under the `transactions` key as one JSON array,
//! newest first.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};

use super::local::LocalStorage;

/// Storage key holding the serialized transaction list
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Outcome of loading the stored list
#[derive(Debug)]
pub enum LoadStatus {
    /// Nothing stored yet
    Empty,
    /// The stored list was read successfully
    Loaded(usize),
    /// The stored list could not be read; continuing with an empty list
    Recovered(TrackerError),
}

/// Repository for the ordered transaction list
pub struct TransactionRepository {
    store: LocalStorage,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(store: LocalStorage) -> Self {
        Self {
            store,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> TrackerResult<RwLockReadGuard<'_, Vec<Transaction>>> {
        self.data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> TrackerResult<RwLockWriteGuard<'_, Vec<Transaction>>> {
        self.data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load the stored list, failing on unreadable data
    pub fn load(&self) -> TrackerResult<usize> {
        let stored: Vec<Transaction> = self.store.get_json(TRANSACTIONS_KEY)?.unwrap_or_default();

        for txn in &stored {
            if let Err(e) = txn.validate() {
                tracing::warn!(id = %txn.id, error = %e, "stored transaction is inconsistent");
            }
        }

        let count = stored.len();
        *self.write()? = stored;
        tracing::debug!(count, "loaded transactions");
        Ok(count)
    }

    /// Load the stored list, falling back to an empty list on failure
    ///
    /// The stored blob is left untouched until the next mutation.
    pub fn load_or_recover(&self) -> LoadStatus {
        match self.load() {
            Ok(0) => LoadStatus::Empty,
            Ok(count) => LoadStatus::Loaded(count),
            Err(e) => {
                tracing::warn!(error = %e, "could not load transactions, starting empty");
                if let Ok(mut data) = self.data.write() {
                    data.clear();
                }
                LoadStatus::Recovered(e)
            }
        }
    }

    /// Persist the whole list
    pub fn save(&self) -> TrackerResult<()> {
        let data = self.read()?;
        self.store.set_json(TRANSACTIONS_KEY, data.as_slice())?;
        tracing::debug!(count = data.len(), "saved transactions");
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        Ok(self.read()?.iter().find(|t| t.id == id).cloned())
    }

    /// All transactions in stored order
    pub fn get_all(&self) -> TrackerResult<Vec<Transaction>> {
        Ok(self.read()?.clone())
    }

    pub fn ids(&self) -> TrackerResult<Vec<TransactionId>> {
        Ok(self.read()?.iter().map(|t| t.id).collect())
    }

    /// Insert a transaction at the front of the list
    pub fn prepend(&self, txn: Transaction) -> TrackerResult<()> {
        let mut data = self.write()?;

        if data.iter().any(|t| t.id == txn.id) {
            return Err(TrackerError::Storage(format!(
                "Transaction id {} already exists",
                txn.id
            )));
        }

        data.insert(0, txn);
        Ok(())
    }

    /// Remove a transaction, returning it if it existed
    pub fn delete(&self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        let mut data = self.write()?;

        Ok(data
            .iter()
            .position(|t| t.id == id)
            .map(|index| data.remove(index)))
    }

    pub fn count(&self) -> TrackerResult<usize> {
        Ok(self.read()?.len())
    }
}
