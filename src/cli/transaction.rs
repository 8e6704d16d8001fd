//! Transaction CLI commands
//!
//! Implements the commands for recording, listing, inspecting and deleting
//! transactions.

use std::io::{BufRead, Write};

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{
    format_signed_amount, format_transaction_details, format_transaction_register,
    format_transaction_row,
};
use crate::display::Notification;
use crate::error::TrackerResult;
use crate::models::TransactionType;
use crate::services::{
    added_message, AddTransactionInput, DateRange, SortKey, TransactionService, TransactionView,
    TypeFilter,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// What the money was for
        description: String,
        /// Positive amount (e.g. "50" or "12.50")
        amount: String,
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        transaction_type: TransactionType,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List transactions
    List {
        /// Which transactions to show
        #[arg(short, long, value_enum, default_value = "all")]
        filter: TypeFilter,
        /// Date window
        #[arg(short, long, value_enum, default_value = "all")]
        range: DateRange,
        /// Sort order
        #[arg(short, long, value_enum, default_value = "date")]
        sort: SortKey,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service =
        TransactionService::new(storage).with_default_category(settings.default_category.clone());

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            transaction_type,
            category,
        } => {
            let mut input = AddTransactionInput::new(description, amount, transaction_type);
            if let Some(category) = category {
                input = input.category(category);
            }

            let txn = service.add(input)?;
            println!("{}", format_transaction_row(&txn, settings));
            Notification::success(added_message(&txn)).show();
        }

        TransactionCommands::List {
            filter,
            range,
            sort,
            limit,
        } => {
            let mut view = TransactionView::new()
                .type_filter(filter)
                .date_range(range)
                .sort_by(sort);
            if let Some(limit) = limit {
                view = view.limit(limit);
            }

            let transactions = service.list(&view, Utc::now())?;
            print!("{}", format_transaction_register(&transactions, settings));
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Description: {}", txn.description);
                println!(
                    "  Amount:      {}",
                    format_signed_amount(txn.amount, &settings.currency_symbol)
                );
                println!("  Category:    {}", txn.category);
                println!();

                let stdin = std::io::stdin();
                let confirmed = confirm(
                    "Are you sure you want to delete this transaction? This action cannot be undone. (yes/no): ",
                    &mut stdin.lock(),
                    &mut std::io::stdout(),
                )?;

                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.delete(txn.id)?;
            Notification::success("Transaction deleted").show();
        }
    }

    Ok(())
}

/// Ask a yes/no question; anything but "yes" or "y" declines
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> TrackerResult<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}
