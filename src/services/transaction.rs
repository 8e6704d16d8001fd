//! Transaction service
//!
//! Business logic for recording and removing transactions. Every mutation
//! is persisted immediately and then written to the audit log. An audit
//! failure after a successful save is logged as a warning and never undoes
//! or fails the mutation.

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{resolve_category, Money, Transaction, TransactionId, TransactionType, DEFAULT_CATEGORY};
use crate::storage::Storage;

use super::filter::TransactionView;
use super::summary::{category_totals, Totals};

/// Message shown when the add form is rejected
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid description and amount";

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    default_category: String,
}

/// Raw user input for a new transaction
#[derive(Debug, Clone, Default)]
pub struct AddTransactionInput {
    pub description: String,
    /// Amount as typed; must parse to a positive number
    pub amount: String,
    pub category: Option<String>,
    pub transaction_type: TransactionType,
}

impl AddTransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: None,
            transaction_type,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Validated description and magnitude
    fn validate(&self) -> TrackerResult<(String, Money)> {
        let invalid = || TrackerError::Validation(INVALID_INPUT_MESSAGE.into());

        let description = self.description.trim();
        if description.is_empty() {
            return Err(invalid());
        }

        let amount = Money::parse(&self.amount).map_err(|e| {
            tracing::debug!(input = %self.amount, error = %e, "rejected amount");
            invalid()
        })?;
        if !amount.is_positive() {
            return Err(invalid());
        }

        Ok((description.to_string(), amount))
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Category used when the input leaves it blank
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    /// Record a new transaction at the current time
    pub fn add(&self, input: AddTransactionInput) -> TrackerResult<Transaction> {
        self.add_at(input, Utc::now())
    }

    /// Record a new transaction dated `now`
    ///
    /// The record goes to the front of the list. Its id is the creation
    /// timestamp in milliseconds, bumped past any existing id it would
    /// collide with.
    pub fn add_at(&self, input: AddTransactionInput, now: DateTime<Utc>) -> TrackerResult<Transaction> {
        let (description, magnitude) = input.validate()?;
        let category = resolve_category(input.category.as_deref(), &self.default_category);

        let id = TransactionId::allocate(now, self.storage.transactions.ids()?)
            .ok_or_else(|| TrackerError::Storage("No transaction id left to allocate".into()))?;
        let txn = Transaction::new(
            id,
            description,
            magnitude,
            category,
            input.transaction_type,
            now,
        );

        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.check_totals(&txn)?;

        self.storage.transactions.prepend(txn.clone())?;
        self.storage.transactions.save()?;
        if let Err(e) = self.storage.log_create(&txn) {
            tracing::warn!(
                id = %txn.id,
                error = %e,
                "transaction saved but the audit log could not be written"
            );
        }

        tracing::info!(id = %txn.id, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    /// Remove a transaction by id, returning the removed record
    pub fn delete(&self, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;
        if let Err(e) = self.storage.log_delete(&txn) {
            tracing::warn!(
                id = %txn.id,
                error = %e,
                "transaction deleted but the audit log could not be written"
            );
        }

        tracing::info!(id = %txn.id, "transaction deleted");
        Ok(txn)
    }

    /// Reject a record that would push the totals out of range
    fn check_totals(&self, txn: &Transaction) -> TrackerResult<()> {
        let mut candidate = self.storage.transactions.get_all()?;
        candidate.push(txn.clone());

        Totals::from_transactions(&candidate)?;
        category_totals(&candidate)?;
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by its id as typed ("1736937000000" or "#1736937000000")
    pub fn find(&self, identifier: &str) -> TrackerResult<Transaction> {
        let id: TransactionId = identifier
            .parse()
            .map_err(|_| TrackerError::Validation(format!("Invalid transaction id: {}", identifier)))?;

        self.get(id)?
            .ok_or_else(|| TrackerError::transaction_not_found(identifier.trim()))
    }

    /// All transactions in stored order (newest first)
    pub fn all(&self) -> TrackerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// The displayed subset for a view
    pub fn list(&self, view: &TransactionView, now: DateTime<Utc>) -> TrackerResult<Vec<Transaction>> {
        Ok(view.apply(&self.all()?, now))
    }

    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.transactions.count()
    }
}

/// Confirmation shown after a successful add
pub fn added_message(txn: &Transaction) -> String {
    format!("{} added successfully!", txn.transaction_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrackerPaths;
    use crate::services::filter::{SortKey, TypeFilter};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_add_expense_is_negative() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(
                AddTransactionInput::new("Lunch", "50", TransactionType::Expense).category("Food"),
                now(),
            )
            .unwrap();

        assert_eq!(txn.amount.cents(), -5000);
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.id, TransactionId::from_timestamp(now()));
        assert_eq!(added_message(&txn), "Expense added successfully!");
    }

    #[test]
    fn test_add_income_is_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(
                AddTransactionInput::new("Salary", "1500.25", TransactionType::Income),
                now(),
            )
            .unwrap();

        assert_eq!(txn.amount.cents(), 150_025);
        assert_eq!(txn.category, DEFAULT_CATEGORY);
        assert_eq!(added_message(&txn), "Income added successfully!");
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .add_at(AddTransactionInput::new("First", "1", TransactionType::Expense), now())
            .unwrap();
        service
            .add_at(
                AddTransactionInput::new("Second", "2", TransactionType::Expense),
                now() + Duration::seconds(1),
            )
            .unwrap();

        let all = service.all().unwrap();
        assert_eq!(all[0].description, "Second");
        assert_eq!(all[1].description, "First");

        let reopened =
            Storage::new(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        reopened.load_all();
        assert_eq!(reopened.transactions.get_all().unwrap(), all);
    }

    #[test]
    fn test_add_same_millisecond_gets_unique_ids() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let a = service
            .add_at(AddTransactionInput::new("A", "1", TransactionType::Expense), now())
            .unwrap();
        let b = service
            .add_at(AddTransactionInput::new("B", "1", TransactionType::Expense), now())
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        for (description, amount) in [("", "10"), ("   ", "10"), ("Lunch", "abc"), ("Lunch", "0"), ("Lunch", "-5"), ("Lunch", "")] {
            let err = service
                .add_at(
                    AddTransactionInput::new(description, amount, TransactionType::Expense),
                    now(),
                )
                .unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        }

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_add_trims_and_normalizes_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage).with_default_category("Bills");

        let txn = service
            .add_at(
                AddTransactionInput::new("  Bus  ", "2.50", TransactionType::Expense)
                    .category("transport"),
                now(),
            )
            .unwrap();
        assert_eq!(txn.description, "Bus");
        assert_eq!(txn.category, "Transport");

        let txn = service
            .add_at(AddTransactionInput::new("Power", "20", TransactionType::Expense), now())
            .unwrap();
        assert_eq!(txn.category, "Bills");
    }

    #[test]
    fn test_delete_removes_only_target() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let keep = service
            .add_at(AddTransactionInput::new("Keep", "1", TransactionType::Expense), now())
            .unwrap();
        let remove = service
            .add_at(
                AddTransactionInput::new("Remove", "2", TransactionType::Income),
                now() + Duration::seconds(1),
            )
            .unwrap();

        let removed = service.delete(remove.id).unwrap();
        assert_eq!(removed, remove);
        assert_eq!(service.all().unwrap(), vec![keep]);
    }

    #[test]
    fn test_delete_unknown_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service.delete(TransactionId::from_raw(42)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(AddTransactionInput::new("Lunch", "5", TransactionType::Expense), now())
            .unwrap();
        service.delete(txn.id).unwrap();

        let entries = storage.audit_logger().unwrap().read_all().unwrap();
        let ops: Vec<Operation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete]);
    }

    #[test]
    fn test_find_by_typed_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(AddTransactionInput::new("Lunch", "5", TransactionType::Expense), now())
            .unwrap();

        assert_eq!(service.find(&format!("#{}", txn.id)).unwrap(), txn);
        assert!(service.find("nope").unwrap_err().is_validation());
        assert!(service.find("1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_applies_view() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .add_at(AddTransactionInput::new("Small", "5", TransactionType::Expense), now())
            .unwrap();
        service
            .add_at(
                AddTransactionInput::new("Big", "500", TransactionType::Expense),
                now() + Duration::seconds(1),
            )
            .unwrap();
        service
            .add_at(
                AddTransactionInput::new("Pay", "100", TransactionType::Income),
                now() + Duration::seconds(2),
            )
            .unwrap();

        let view = TransactionView::new()
            .type_filter(TypeFilter::Expenses)
            .sort_by(SortKey::Amount);
        let shown = service.list(&view, now()).unwrap();

        let names: Vec<&str> = shown.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["Big", "Small"]);
    }

    #[test]
    fn test_add_rounds_extra_decimals_and_accepts_exponents() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(AddTransactionInput::new("A", "12.345", TransactionType::Expense), now())
            .unwrap();
        assert_eq!(txn.amount.cents(), -1235);

        let txn = service
            .add_at(AddTransactionInput::new("B", "1e3", TransactionType::Income), now())
            .unwrap();
        assert_eq!(txn.amount.cents(), 100_000);
    }

    #[test]
    fn test_add_rejects_amount_that_overflows_totals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let huge = "92233720368547758";

        service
            .add_at(AddTransactionInput::new("Windfall", huge, TransactionType::Income), now())
            .unwrap();
        let err = service
            .add_at(AddTransactionInput::new("Windfall", huge, TransactionType::Income), now())
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 1);
        assert_eq!(
            Totals::from_transactions(&service.all().unwrap()).unwrap().income.cents(),
            9_223_372_036_854_775_800
        );
    }

    #[test]
    fn test_mutations_survive_unwritable_audit_log() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let service = TransactionService::new(&storage);

        let txn = service
            .add_at(AddTransactionInput::new("Lunch", "50", TransactionType::Expense), now())
            .unwrap();
        assert_eq!(service.count().unwrap(), 1);

        service.delete(txn.id).unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .prepend(Transaction::new(
                TransactionId::from_raw(i64::MAX),
                "Last",
                Money::from_cents(100),
                DEFAULT_CATEGORY,
                TransactionType::Expense,
                now(),
            ))
            .unwrap();
        let service = TransactionService::new(&storage);

        let err = service
            .add_at(AddTransactionInput::new("Next", "1", TransactionType::Expense), now())
            .unwrap_err();

        assert!(matches!(err, TrackerError::Storage(_)));
        assert_eq!(service.count().unwrap(), 1);
    }
}
