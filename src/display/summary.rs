//! Balance overview and expense chart formatting

use crossterm::style::{Color, Stylize};

use crate::models::{Money, PRESET_CATEGORIES};
use crate::services::{CategoryTotal, Totals};

use super::fit;

/// Width of the chart bars in characters
pub const CHART_WIDTH: usize = 30;

/// Format a bar for visual representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Total Balance, Total Income and Total Expenses, one per line
///
/// Expenses are shown as a positive magnitude. With `color`, the balance is
/// green when non-negative and red otherwise.
pub fn format_balance_overview(totals: &Totals, symbol: &str, color: bool) -> String {
    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let rows = [
        ("Total Balance", totals.balance, balance_color),
        ("Total Income", totals.income, Color::Green),
        ("Total Expenses", totals.expenses.abs(), Color::Red),
    ];

    let mut output = String::new();
    for (label, amount, row_color) in rows {
        let value = format!("{:>18}", amount.format_grouped(symbol));
        if color {
            output.push_str(&format!("{:<16}{}\n", label, value.with(row_color)));
        } else {
            output.push_str(&format!("{:<16}{}\n", label, value));
        }
    }

    output
}

/// Expenses by category as a bar chart, or `None` when there are no expenses
pub fn format_category_chart(totals: &[CategoryTotal], symbol: &str) -> Option<String> {
    if totals.is_empty() {
        return None;
    }

    let max = totals
        .iter()
        .map(|c| c.total)
        .max()
        .unwrap_or_else(Money::zero);

    let mut output = String::new();
    output.push_str("Expenses by Category\n");
    output.push_str(&separator(14 + CHART_WIDTH + 26));
    output.push('\n');

    for entry in totals {
        output.push_str(&format!(
            "{}  {}  {:>14} {:>6.1}%\n",
            fit(&entry.category, 14),
            format_bar(entry.total.cents() as f64, max.cents() as f64, CHART_WIDTH),
            entry.total.format_grouped(symbol),
            entry.percentage
        ));
    }

    Some(output)
}

/// The preset categories, one per line
pub fn format_category_list(default_category: &str) -> String {
    let mut output = String::new();

    for name in PRESET_CATEGORIES {
        if name == default_category {
            output.push_str(&format!("{} (default)\n", name));
        } else {
            output.push_str(&format!("{}\n", name));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, cents: i64, percentage: f64) -> CategoryTotal {
        CategoryTotal {
            category: name.to_string(),
            total: Money::from_cents(cents),
            transaction_count: 1,
            percentage,
        }
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_balance_overview() {
        let totals = Totals {
            income: Money::from_cents(200_000),
            expenses: Money::from_cents(-50_000),
            balance: Money::from_cents(150_000),
            count: 2,
        };

        let output = format_balance_overview(&totals, "₦", false);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Total Balance"));
        assert!(lines[0].ends_with("₦1,500.00"));
        assert!(lines[1].ends_with("₦2,000.00"));
        assert!(lines[2].ends_with("₦500.00"));
        assert!(!lines[2].contains('-'));
    }

    #[test]
    fn test_chart_hidden_without_expenses() {
        assert!(format_category_chart(&[], "₦").is_none());
    }

    #[test]
    fn test_chart_rows() {
        let chart = format_category_chart(
            &[category("Food", 7500, 75.0), category("Transport", 2500, 25.0)],
            "₦",
        )
        .unwrap();

        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Expenses by Category");
        assert!(lines[2].starts_with("Food"));
        assert!(lines[2].contains(&"█".repeat(CHART_WIDTH)));
        assert!(lines[2].ends_with("75.0%"));
        assert!(lines[3].contains("₦25.00"));
    }

    #[test]
    fn test_category_list_marks_default() {
        let output = format_category_list("Food");
        assert!(output.contains("Food (default)\n"));
        assert!(output.starts_with("General\n"));
        assert_eq!(output.lines().count(), PRESET_CATEGORIES.len());
    }
}
