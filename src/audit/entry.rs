//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionId};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was recorded
    Create,
    /// Transaction was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the transaction list together with a snapshot of
/// the affected record: `after` for creates, `before` for deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub transaction_id: TransactionId,

    /// Description of the affected transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Transaction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Transaction>,
}

impl AuditEntry {
    /// Entry for a newly recorded transaction
    pub fn create(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            transaction_id: txn.id,
            description: Some(txn.description.clone()),
            before: None,
            after: Some(txn.clone()),
        }
    }

    /// Entry for a removed transaction
    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            transaction_id: txn.id,
            description: Some(txn.description.clone()),
            before: Some(txn.clone()),
            after: None,
        }
    }

    /// The transaction snapshot carried by this entry
    pub fn snapshot(&self) -> Option<&Transaction> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Transaction {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.transaction_id
        );

        if let Some(description) = &self.description {
            output.push_str(&format!(" ({})", description));
        }

        if let Some(txn) = self.snapshot() {
            output.push_str(&format!(" {} {}", txn.category, txn.amount));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::TimeZone;

    fn sample() -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1_736_937_000_000),
            "Groceries",
            Money::from_cents(4550),
            "Food",
            TransactionType::Expense,
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&sample());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.transaction_id.as_i64(), 1_736_937_000_000);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(sample()));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&sample());

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.before, Some(sample()));
        assert!(entry.after.is_none());
        assert_eq!(entry.snapshot(), Some(&sample()));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(&sample());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"before\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.after, Some(sample()));
    }

    #[test]
    fn test_human_readable_format() {
        let formatted = AuditEntry::delete(&sample()).format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("1736937000000"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("-45.50"));
    }
}
