//! Summary and category commands

use crate::config::Settings;
use crate::display::colors_enabled;
use crate::display::summary::{
    format_balance_overview, format_category_chart, format_category_list,
};
use crate::error::TrackerResult;
use crate::services::{category_totals, Totals};
use crate::storage::Storage;

/// Print the balance overview followed by the expense chart
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> TrackerResult<()> {
    let transactions = storage.transactions.get_all()?;
    let symbol = settings.currency_symbol.as_str();

    let totals = Totals::from_transactions(&transactions)?;
    print!("{}", format_balance_overview(&totals, symbol, colors_enabled()));

    // Hidden entirely when nothing has been spent
    if let Some(chart) = format_category_chart(&category_totals(&transactions)?, symbol) {
        println!();
        print!("{}", chart);
    }

    Ok(())
}

/// Print the preset categories
pub fn handle_categories_command(settings: &Settings) -> TrackerResult<()> {
    print!("{}", format_category_list(&settings.default_category));
    Ok(())
}
