//! Filtered and sorted views over the transaction list

use std::cmp::Reverse;

use chrono::{DateTime, Duration, Months, Utc};
use clap::ValueEnum;

use crate::models::Transaction;

/// Which transactions to show, by sign of the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expenses,
}

impl TypeFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Income => txn.amount.is_positive(),
            Self::Expenses => txn.amount.is_negative(),
        }
    }
}

/// Date window relative to now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DateRange {
    #[default]
    All,
    /// The last 7 days
    Week,
    /// Since the same instant one calendar month ago
    Month,
}

impl DateRange {
    /// Earliest included instant, or `None` for an unbounded window
    ///
    /// A month back from a day that doesn't exist in the previous month
    /// clamps to that month's last day (Mar 31 -> Feb 28).
    pub fn start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::All => None,
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now.checked_sub_months(Months::new(1)).unwrap_or(now)),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.start(now).map_or(true, |start| date >= start)
    }
}

/// Ordering of the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Newest first
    #[default]
    Date,
    /// Largest absolute amount first
    Amount,
}

/// A type filter, date window, sort order and optional row limit
#[derive(Debug, Clone, Default)]
pub struct TransactionView {
    pub type_filter: TypeFilter,
    pub date_range: DateRange,
    pub sort_by: SortKey,
    pub limit: Option<usize>,
}

impl TransactionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_filter(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Derive the displayed subset of `transactions`
    ///
    /// Sorting is stable, so ties keep their stored order.
    pub fn apply(&self, transactions: &[Transaction], now: DateTime<Utc>) -> Vec<Transaction> {
        let mut shown: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.type_filter.matches(t))
            .filter(|t| self.date_range.contains(t.date, now))
            .cloned()
            .collect();

        match self.sort_by {
            SortKey::Date => shown.sort_by_key(|t| Reverse(t.date)),
            SortKey::Amount => shown.sort_by_key(|t| Reverse(t.amount.abs())),
        }

        if let Some(limit) = self.limit {
            shown.truncate(limit);
        }

        shown
    }
}
