//! Printable HTML report
//!
//! A standalone page with summary totals and a table of every transaction.
//! The page opens the browser's print dialog once loaded.

use std::fmt::Display;

use chrono::TimeZone;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::error::TrackerResult;
use crate::models::Transaction;
use crate::services::Totals;

/// Default file name for report exports
pub const REPORT_FILE_NAME: &str = "report.html";

pub const REPORT_TITLE: &str = "Expense Tracker Report";

const REPORT_STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #1f2937; text-align: center; }
.summary { display: flex; justify-content: space-around; margin: 20px 0; }
.summary div { text-align: center; padding: 10px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { border: 1px solid #ccc; padding: 8px; text-align: left; }
th { background-color: #f3f4f6; }
.income { color: #10b981; }
.expense { color: #ef4444; }
"#;

const PRINT_ON_LOAD: &str = "window.addEventListener('load', () => window.print());";

/// Formatting choices for the report
pub struct ReportOptions<'a, Tz: TimeZone> {
    pub currency_symbol: &'a str,
    pub date_format: &'a str,
    pub tz: Tz,
}

/// Render the report for `transactions`
pub fn render_report<Tz>(
    transactions: &[Transaction],
    options: &ReportOptions<'_, Tz>,
) -> TrackerResult<Markup>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let totals = Totals::from_transactions(transactions)?;
    let symbol = options.currency_symbol;

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Expense Report" }
                style { (PreEscaped(REPORT_STYLE)) }
            }
            body {
                h1 { (REPORT_TITLE) }
                div.summary {
                    div {
                        strong { "Total Balance:" } " "
                        (totals.balance.format_grouped(symbol))
                    }
                    div {
                        strong { "Total Income:" } " "
                        span.income { (totals.income.format_grouped(symbol)) }
                    }
                    div {
                        strong { "Total Expenses:" } " "
                        span.expense { (totals.expenses.abs().format_grouped(symbol)) }
                    }
                }
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Description" }
                            th { "Category" }
                            th { "Type" }
                            th { "Amount" }
                        }
                    }
                    tbody {
                        @for txn in transactions {
                            (report_row(txn, options))
                        }
                    }
                }
                script { (PreEscaped(PRINT_ON_LOAD)) }
            }
        }
    })
}

fn report_row<Tz>(txn: &Transaction, options: &ReportOptions<'_, Tz>) -> Markup
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let class = if txn.is_income() { "income" } else { "expense" };
    let date = txn
        .date
        .with_timezone(&options.tz)
        .format(options.date_format)
        .to_string();

    html! {
        tr {
            td { (date) }
            td { (txn.description) }
            td { (txn.category) }
            td { (txn.type_label()) }
            td class=(class) { (txn.amount.abs().format_grouped(options.currency_symbol)) }
        }
    }
}
