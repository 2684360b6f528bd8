//! Console adapters for the interaction traits

use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

use super::traits::{ConfirmationGate, Notifier};

/// Interactive yes/no prompt backed by dialoguer.
pub struct DialoguerGate {
    theme: ColorfulTheme,
    default_answer: bool,
}

impl DialoguerGate {
    /// Create a gate with the given pre-selected answer.
    #[must_use]
    pub fn new(default_answer: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            default_answer,
        }
    }
}

impl Default for DialoguerGate {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ConfirmationGate for DialoguerGate {
    fn confirm(&self, message: &str, heading: &str) -> bool {
        println!("{}", heading.bold());
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(self.default_answer)
            .interact()
            .unwrap_or_else(|e| {
                log::warn!("confirmation prompt failed, treating as no: {e}");
                false
            })
    }
}

/// Notifier printing to stdout with a message-box layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str, heading: &str) {
        println!("{}", heading.bold());
        println!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_creation() {
        let _gate = DialoguerGate::new(true);
        let _gate2 = DialoguerGate::default();
    }

    #[test]
    fn test_console_notifier_writes() {
        let notifier = ConsoleNotifier::new();
        notifier.info("done", "Deletion of pages");
    }
}
