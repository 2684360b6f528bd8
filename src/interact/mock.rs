//! Mock interaction collaborators for testing

use std::cell::RefCell;

use super::traits::{ConfirmationGate, Notifier};

/// Gate that answers with a predetermined decision and records each request.
///
/// Useful for testing without requiring user interaction
#[derive(Debug, Default)]
pub struct ScriptedGate {
    /// Answer returned for every request
    pub answer: bool,
    /// Every `(message, heading)` pair the gate was asked
    pub requests: RefCell<Vec<(String, String)>>,
}

impl ScriptedGate {
    /// Create a gate giving the same answer to every request.
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            requests: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        self.requests.borrow().last().map(|(message, _)| message.clone())
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&self, message: &str, heading: &str) -> bool {
        self.requests
            .borrow_mut()
            .push((message.to_string(), heading.to_string()));
        self.answer
    }
}

/// Notifier that records every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    /// Every `(message, heading)` pair delivered
    pub notices: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notice_count(&self) -> usize {
        self.notices.borrow().len()
    }

    #[must_use]
    pub fn headings(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|(_, heading)| heading.clone())
            .collect()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str, heading: &str) {
        self.notices
            .borrow_mut()
            .push((message.to_string(), heading.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_gate_records_requests() {
        let gate = ScriptedGate::answering(true);
        assert!(gate.confirm("delete?", "Deletion"));
        assert!(gate.confirm("again?", "Deletion"));
        assert_eq!(gate.request_count(), 2);
        assert_eq!(gate.last_message().unwrap(), "again?");
    }

    #[test]
    fn test_scripted_gate_says_no() {
        let gate = ScriptedGate::answering(false);
        assert!(!gate.confirm("delete?", "Deletion"));
    }

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.info("done", "Deletion of pages");
        assert_eq!(notifier.notice_count(), 1);
        assert_eq!(notifier.headings(), vec!["Deletion of pages"]);
        assert_eq!(notifier.messages(), vec!["done"]);
    }
}
