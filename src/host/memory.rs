//! In-memory named collection.
//!
//! Stands in for a host collection when scripting against plain data, and
//! doubles as the collection used throughout the test suite.

use super::{HostError, NamedCollection, NamedItem};

/// Ordered collection of named items held in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryCollection {
    items: Vec<NamedItem>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a list of names, keeping their order.
    #[must_use]
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            items: names.iter().map(|name| NamedItem::new(*name)).collect(),
        }
    }

    /// Append an item; the name must not be taken yet.
    ///
    /// # Errors
    /// Returns `HostError::Duplicate` when the name already exists.
    pub fn add(&mut self, name: &str) -> Result<(), HostError> {
        if self.items.iter().any(|item| item.name() == name) {
            return Err(HostError::Duplicate { name: name.to_string() });
        }
        self.items.push(NamedItem::new(name));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NamedCollection for MemoryCollection {
    fn list(&self) -> Vec<NamedItem> {
        self.items.clone()
    }

    fn remove(&mut self, item: &NamedItem) -> Result<(), HostError> {
        let position = self
            .items
            .iter()
            .position(|candidate| candidate.name() == item.name())
            .ok_or_else(|| HostError::NotFound { name: item.name().to_string() })?;
        self.items.remove(position);
        Ok(())
    }

    fn rename(&mut self, item: &NamedItem, new_name: &str) -> Result<(), HostError> {
        let position = self
            .items
            .iter()
            .position(|candidate| candidate.name() == item.name())
            .ok_or_else(|| HostError::NotFound { name: item.name().to_string() })?;
        let taken = self
            .items
            .iter()
            .enumerate()
            .any(|(index, candidate)| index != position && candidate.name() == new_name);
        if taken {
            return Err(HostError::Duplicate { name: new_name.to_string() });
        }
        self.items[position] = NamedItem::new(new_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_names_keeps_order() {
        let collection = MemoryCollection::with_names(&["a", "b", "c"]);
        assert_eq!(collection.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut collection = MemoryCollection::with_names(&["a"]);
        assert_eq!(
            collection.add("a").unwrap_err(),
            HostError::Duplicate { name: "a".to_string() }
        );
        collection.add("b").unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut collection = MemoryCollection::with_names(&["a", "b"]);
        collection.remove(&NamedItem::new("a")).unwrap();
        assert_eq!(collection.names(), vec!["b"]);
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut collection = MemoryCollection::with_names(&["a"]);
        assert_eq!(
            collection.remove(&NamedItem::new("z")).unwrap_err(),
            HostError::NotFound { name: "z".to_string() }
        );
    }

    #[test]
    fn test_rename_in_place() {
        let mut collection = MemoryCollection::with_names(&["a", "b"]);
        collection.rename(&NamedItem::new("a"), "a2").unwrap();
        assert_eq!(collection.names(), vec!["a2", "b"]);
    }

    #[test]
    fn test_rename_to_taken_name_is_duplicate() {
        let mut collection = MemoryCollection::with_names(&["a", "b"]);
        assert_eq!(
            collection.rename(&NamedItem::new("a"), "b").unwrap_err(),
            HostError::Duplicate { name: "b".to_string() }
        );
    }

    #[test]
    fn test_rename_to_same_name_is_allowed() {
        let mut collection = MemoryCollection::with_names(&["a"]);
        collection.rename(&NamedItem::new("a"), "a").unwrap();
        assert_eq!(collection.names(), vec!["a"]);
    }

    #[test]
    fn test_find() {
        let collection = MemoryCollection::with_names(&["a"]);
        assert_eq!(collection.find("a"), Some(NamedItem::new("a")));
        assert_eq!(collection.find("z"), None);
    }
}
