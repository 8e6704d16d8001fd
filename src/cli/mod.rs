//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod history;
pub mod summary;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands};
pub use history::handle_history_command;
pub use summary::{handle_categories_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
