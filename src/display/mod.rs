//! Display formatting for terminal output
//!
//! Formatting functions return strings. Color is only added when the caller
//! asks for it, see [`colors_enabled`].

pub mod notification;
pub mod summary;
pub mod transaction;

pub use notification::{Notification, NotificationType};
pub use summary::{format_balance_overview, format_category_chart, format_category_list};
pub use transaction::{
    format_transaction_details, format_transaction_register, EMPTY_LIST_MESSAGE,
};

use crossterm::tty::IsTty;

/// Whether stdout should receive ANSI colors
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty()
}

/// Pad or cut a string to exactly `width` characters
pub(crate) fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
