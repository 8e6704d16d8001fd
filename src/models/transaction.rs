//! Transaction model
//!
//! A transaction is one recorded income or expense event. The sign of the
//! amount always agrees with the type: expenses are negative, income is
//! positive.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Apply this type's sign to a non-negative magnitude
    pub fn signed(&self, magnitude: Money) -> Money {
        match self {
            Self::Income => magnitude.abs(),
            Self::Expense => -magnitude.abs(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Creation timestamp in milliseconds, unique within the list
    pub id: TransactionId,

    pub description: String,

    /// Signed amount (negative for expenses, positive for income)
    pub amount: Money,

    pub category: String,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction, signing `magnitude` according to `transaction_type`
    pub fn new(
        id: TransactionId,
        description: impl Into<String>,
        magnitude: Money,
        category: impl Into<String>,
        transaction_type: TransactionType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount: transaction_type.signed(magnitude),
            category: category.into(),
            date,
            transaction_type,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Label derived from the amount's sign, as shown in exports
    pub fn type_label(&self) -> &'static str {
        if self.is_income() {
            "Income"
        } else {
            "Expense"
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }

        let sign_matches = match self.transaction_type {
            TransactionType::Income => self.amount.is_positive(),
            TransactionType::Expense => self.amount.is_negative(),
        };
        if !sign_matches {
            return Err(TransactionValidationError::SignMismatch {
                amount: self.amount,
                transaction_type: self.transaction_type,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    ZeroAmount,
    SignMismatch {
        amount: Money,
        transaction_type: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Transaction description is empty"),
            Self::ZeroAmount => write!(f, "Transaction amount is zero"),
            Self::SignMismatch {
                amount,
                transaction_type,
            } => write!(
                f,
                "Amount {} does not match transaction type {}",
                amount, transaction_type
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
