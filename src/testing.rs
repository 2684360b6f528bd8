//! Testing utilities for dashr
//!
//! Shared fixtures for the unit tests: realistic production column names
//! and a pre-populated in-memory collection.
//!
//! Only available when compiled with `cfg(test)`.

use crate::host::MemoryCollection;

/// Convert a slice of string literals into owned names.
#[must_use]
pub fn to_names(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

/// Production-style column names mixing rate categories, history variants
/// and date/time columns.
#[must_use]
pub fn production_columns() -> Vec<String> {
    to_names(&["DATE", "WOPR:OP_1", "WOPRH:OP_1", "WWCT:OP_1", "WOPR:OP_2", "TIME"])
}

/// Collection with a handful of report pages.
#[must_use]
pub fn report_pages() -> MemoryCollection {
    MemoryCollection::with_names(&["Summary", "Rates p1", "Rates p2", "Scratch"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NamedCollection;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(production_columns().len(), 6);
        assert_eq!(report_pages().names().len(), 4);
    }
}
