//! Rename mappings parsed from analyst-supplied files.

use std::path::Path;

use crate::DashrError;

type Result<T> = std::result::Result<T, DashrError>;

/// Input format for a mapping file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingFormat {
    /// `old new` per line, `#` comments and blank lines ignored
    PlainText,
    /// Two columns with the given delimiter
    Csv(char),
    /// Array of `{"from": .., "to": ..}` objects
    Json,
}

/// One old-name → new-name entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameMapping {
    pub from: String,
    pub to: String,
}

/// Ordered set of rename entries with keyed lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameMap {
    entries: Vec<RenameMapping>,
}

impl RenameMap {
    #[must_use]
    pub fn new(entries: Vec<RenameMapping>) -> Self {
        Self { entries }
    }

    /// Build a map from `(old, new)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(from, to)| RenameMapping {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                })
                .collect(),
        }
    }

    /// New name for `from`, if the map has one.
    #[must_use]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.from == from)
            .map(|entry| entry.to.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenameMapping> {
        self.entries.iter()
    }

    /// Read a mapping file in the given format.
    ///
    /// # Errors
    /// Returns `DashrError::InvalidInput` when the file cannot be read or
    /// its content does not parse as a mapping.
    pub fn load(path: &Path, format: MappingFormat) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashrError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
        })?;
        match format {
            MappingFormat::PlainText => parse_text(&content),
            MappingFormat::Csv(delimiter) => parse_csv(&content, delimiter),
            MappingFormat::Json => parse_json(&content),
        }
    }
}

/// Parse `old new` lines; blank lines and `#` comments are ignored.
///
/// # Errors
/// Returns `DashrError::InvalidInput` for lines without exactly two fields.
pub fn parse_text(content: &str) -> Result<RenameMap> {
    let mut entries = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(DashrError::InvalidInput(format!(
                "Invalid mapping at line {}: expected 'old new'",
                i + 1
            )));
        }
        entries.push(RenameMapping {
            from: parts[0].to_string(),
            to: parts[1].to_string(),
        });
    }
    Ok(RenameMap::new(entries))
}

/// Parse two-column CSV with the given delimiter.
///
/// # Errors
/// Returns `DashrError::InvalidInput` for unreadable records, a wrong column
/// count, empty fields, or content that looks like JSON.
pub fn parse_csv(content: &str, delimiter: char) -> Result<RenameMap> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Err(DashrError::InvalidInput(
            "Invalid CSV mapping: content appears to be JSON".to_string(),
        ));
    }
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(content.as_bytes());
    let mut entries = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let record = rec.map_err(|e| {
            DashrError::InvalidInput(format!("Invalid CSV mapping at record {}: {}", i + 1, e))
        })?;
        if record.len() != 2 {
            return Err(DashrError::InvalidInput(format!(
                "Invalid CSV mapping at record {}: expected exactly 2 fields (old,new)",
                i + 1
            )));
        }
        let from = record.get(0).unwrap().trim();
        let to = record.get(1).unwrap().trim();
        if from.is_empty() || to.is_empty() {
            return Err(DashrError::InvalidInput(format!(
                "Invalid CSV mapping at record {}: empty field",
                i + 1
            )));
        }
        entries.push(RenameMapping {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(RenameMap::new(entries))
}

/// Parse a JSON array of `{"from": .., "to": ..}` objects.
///
/// # Errors
/// Returns `DashrError::InvalidInput` when the content is not such an array.
pub fn parse_json(content: &str) -> Result<RenameMap> {
    #[derive(serde::Deserialize)]
    struct JsonMap {
        from: String,
        to: String,
    }
    let parsed: Vec<JsonMap> = serde_json::from_str(content)
        .map_err(|e| DashrError::InvalidInput(format!("Invalid JSON mapping: {e}")))?;
    Ok(RenameMap::new(
        parsed
            .into_iter()
            .map(|jm| RenameMapping { from: jm.from, to: jm.to })
            .collect(),
    ))
}
