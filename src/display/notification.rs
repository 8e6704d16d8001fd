//! Notifications
//!
//! Short messages reported after an action. They go to stderr so that
//! listings and exports on stdout stay clean.

use std::fmt;

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A message shown once to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Write the notification to stderr
    pub fn show(&self) {
        let colored = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_tty();
        if colored {
            let icon = format!("[{}]", self.notification_type.icon());
            eprintln!("{} {}", icon.with(self.notification_type.color()), self.message);
        } else {
            eprintln!("{}", self);
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type.icon(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Notification::success("CSV exported successfully!").to_string(),
            "[+] CSV exported successfully!"
        );
        assert_eq!(Notification::error("boom").to_string(), "[x] boom");
    }

    #[test]
    fn test_constructors_set_type() {
        assert_eq!(
            Notification::warning("w").notification_type,
            NotificationType::Warning
        );
        assert_eq!(Notification::info("i").notification_type, NotificationType::Info);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }
}
