//! Host document capability contracts.
//!
//! The live document (pages, data tables, columns, rows, visuals) belongs to
//! an external host. The executor only ever reaches it through
//! [`NamedCollection`], so the same scripts run against a real host binding,
//! the bundled [`MemoryCollection`] or a test double.

pub mod memory;

pub use memory::MemoryCollection;

use thiserror::Error;

/// Errors surfaced by a backing collection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The named item is not in the collection
    #[error("No item named '{name}' in the collection")]
    NotFound { name: String },
    /// The target name is already taken
    #[error("An item named '{name}' already exists")]
    Duplicate { name: String },
}

/// An item addressed by its unique name within a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    name: String,
}

impl NamedItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Capability contract for one named collection of the host document.
///
/// Iteration order is the host's; names are unique within a collection. The
/// collection is shared mutable state owned by the host, so nothing here
/// caches a snapshot across calls.
pub trait NamedCollection {
    /// List the items currently in the collection.
    fn list(&self) -> Vec<NamedItem>;

    /// Remove one item.
    ///
    /// # Errors
    /// Returns `HostError::NotFound` when the item is no longer present.
    fn remove(&mut self, item: &NamedItem) -> Result<(), HostError>;

    /// Give one item a new name.
    ///
    /// # Errors
    /// Returns `HostError::NotFound` when the item is no longer present and
    /// `HostError::Duplicate` when the new name is already taken.
    fn rename(&mut self, item: &NamedItem, new_name: &str) -> Result<(), HostError>;

    /// Look up an item by exact name.
    fn find(&self, name: &str) -> Option<NamedItem> {
        self.list().into_iter().find(|item| item.name() == name)
    }

    /// The names in the collection, in iteration order.
    fn names(&self) -> Vec<String> {
        self.list()
            .into_iter()
            .map(|item| item.name().to_string())
            .collect()
    }
}
