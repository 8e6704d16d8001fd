//! Expense tracker - local-first income and expense tracking
//!
//! This library provides the core functionality for the `expense` command:
//! recording income and expense transactions, deriving balances and
//! per-category totals, filtered list views, and CSV/HTML exports. The list
//! is kept in a small local key-value store as a single JSON array.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, categories)
//! - `storage`: Key-value file storage and the transaction repository
//! - `audit`: Audit logging system
//! - `services`: Business logic layer (add/delete, aggregates, views)
//! - `export`: CSV and HTML report export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::services::{AddTransactionInput, TransactionService};
//! use expense_tracker::models::TransactionType;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all();
//!
//! let service = TransactionService::new(&storage);
//! service.add(AddTransactionInput::new("Lunch", "50", TransactionType::Expense))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
