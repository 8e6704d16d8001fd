//! Transaction display formatting
//!
//! Register views and detail output. Dates are shown in local time.

use chrono::Local;

use crate::config::Settings;
use crate::models::{Money, Transaction};

use super::fit;

/// Shown when a view has no rows
pub const EMPTY_LIST_MESSAGE: &str = "No transactions found. Add your first transaction above!";

/// Amount with an explicit sign ("+₦1,500.00", "-₦50.00")
pub fn format_signed_amount(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { '-' } else { '+' };
    format!("{}{}", sign, amount.abs().format_grouped(symbol))
}

/// Local date of a transaction in the configured format
pub fn format_date(txn: &Transaction, settings: &Settings) -> String {
    txn.date
        .with_timezone(&Local)
        .format(&settings.date_format)
        .to_string()
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:<13}  {:<10}  {}  {}  {:>16}",
        txn.id,
        format_date(txn, settings),
        fit(&txn.description, 24),
        fit(&txn.category, 14),
        format_signed_amount(txn.amount, &settings.currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<10}  {:24}  {:14}  {:>16}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(87));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", format_date(txn, settings)));
    output.push_str(&format!("Recorded:    {}\n", txn.date.to_rfc3339()));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed_amount(txn.amount, &settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionId, TransactionType};
    use chrono::{TimeZone, Utc};

    fn txn(description: &str, cents: i64, transaction_type: TransactionType) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(1_736_937_000_000),
            description,
            Money::from_cents(cents),
            "Food",
            transaction_type,
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(format_signed_amount(Money::from_cents(-5000), "₦"), "-₦50.00");
        assert_eq!(format_signed_amount(Money::from_cents(150_000), "₦"), "+₦1,500.00");
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &Settings::default());
        assert_eq!(output.trim_end(), EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn test_register_rows() {
        let settings = Settings::default();
        let list = vec![
            txn("Lunch", 5000, TransactionType::Expense),
            txn("Salary", 150_000, TransactionType::Income),
        ];

        let output = format_transaction_register(&list, &settings);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Lunch"));
        assert!(lines[2].ends_with("-₦50.00"));
        assert!(lines[3].ends_with("+₦1,500.00"));
        assert!(lines[2].contains(&format_date(&list[0], &settings)));
        assert_eq!(lines[4], "2 transaction(s)");
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(
            &txn("Lunch", 5000, TransactionType::Expense),
            &Settings::default(),
        );

        assert!(output.contains("Transaction: 1736937000000"));
        assert!(output.contains("Description: Lunch"));
        assert!(output.contains("Amount:      -₦50.00"));
        assert!(output.contains("Type:        Expense"));
    }
}
