//! Interaction abstraction layer
//!
//! Every mutating operation goes through a [`ConfirmationGate`] before it
//! commits and reports its outcome through a [`Notifier`]. Both are traits
//! so the dialoguer-backed console adapters can be swapped for a host dialog
//! binding, or for the mocks used in tests, without changing the flows.

mod traits;

pub mod console;

#[cfg(test)]
pub mod mock;

pub use console::{ConsoleNotifier, DialoguerGate};
pub use traits::{ConfirmationGate, Notifier, NullNotifier};

use crate::config::DashrConfig;

/// Build the standard gate/notifier pair for a loaded configuration.
#[must_use]
pub fn from_config(config: &DashrConfig) -> (DialoguerGate, Box<dyn Notifier>) {
    let gate = DialoguerGate::new(config.confirm_default);
    let notifier: Box<dyn Notifier> = if config.quiet {
        Box::new(NullNotifier)
    } else {
        Box::new(ConsoleNotifier::new())
    };
    (gate, notifier)
}
