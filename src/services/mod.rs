//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, id allocation, derived aggregates and list views.

pub mod filter;
pub mod summary;
pub mod transaction;

pub use filter::{DateRange, SortKey, TransactionView, TypeFilter};
pub use summary::{category_totals, CategoryTotal, Totals};
pub use transaction::{added_message, AddTransactionInput, TransactionService, INVALID_INPUT_MESSAGE};
