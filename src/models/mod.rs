//! Core data models for the expense tracker
//!
//! Transactions, their amounts and identifiers, and the preset category list.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{resolve_category, DEFAULT_CATEGORY, PRESET_CATEGORIES};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType, TransactionValidationError};
