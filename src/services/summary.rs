//! Derived aggregates over the transaction list
//!
//! Income, expenses and balance are plain reductions over the signed
//! amounts. Category totals cover expenses only and are reported as
//! positive magnitudes.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction};

/// Income, expense and balance totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of negative amounts (zero or negative)
    pub expenses: Money,
    /// `income + expenses`
    pub balance: Money,
    pub count: usize,
}

impl Totals {
    /// Fails when a sum leaves the representable amount range
    pub fn from_transactions(transactions: &[Transaction]) -> TrackerResult<Self> {
        transactions
            .iter()
            .try_fold(Self::default(), |totals, txn| totals.including(txn))
    }

    /// These totals with one more transaction counted
    pub fn including(self, txn: &Transaction) -> TrackerResult<Self> {
        let mut totals = self;
        if txn.amount.is_positive() {
            totals.income = totals.income.checked_add(txn.amount).ok_or_else(out_of_range)?;
        } else if txn.amount.is_negative() {
            totals.expenses = totals.expenses.checked_add(txn.amount).ok_or_else(out_of_range)?;
        }
        totals.balance = totals.income.checked_add(totals.expenses).ok_or_else(out_of_range)?;
        totals.count += 1;
        Ok(totals)
    }
}

fn out_of_range() -> TrackerError {
    TrackerError::Validation("Totals exceed the largest amount that can be tracked".into())
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    /// Sum of absolute expense amounts
    pub total: Money,
    pub transaction_count: usize,
    /// Share of all expenses, 0-100
    pub percentage: f64,
}

/// Per-category expense totals in order of first appearance
///
/// Income never contributes. Categories with no expenses are absent.
pub fn category_totals(transactions: &[Transaction]) -> TrackerResult<Vec<CategoryTotal>> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.amount.is_negative()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => {
                entry.total = entry
                    .total
                    .checked_add(txn.amount.abs())
                    .ok_or_else(out_of_range)?;
                entry.transaction_count += 1;
            }
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount.abs(),
                transaction_count: 1,
                percentage: 0.0,
            }),
        }
    }

    let grand_total =
        Money::checked_sum(totals.iter().map(|c| c.total)).ok_or_else(out_of_range)?;
    if grand_total.is_positive() {
        for entry in &mut totals {
            entry.percentage = entry.total.cents() as f64 / grand_total.cents() as f64 * 100.0;
        }
    }

    Ok(totals)
}
