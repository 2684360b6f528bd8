//! Tab-delimited table serialization.
//!
//! Produces the exact text stream a host text data source ingests:
//! tab-joined fields, `\r\n` line ends, header first. Body rows that do not
//! match the header width are dropped with a warning instead of failing the
//! whole conversion.

use thiserror::Error;

/// Line ending understood by the host's text reader.
const LINE_END: &str = "\r\n";

/// Errors produced while serializing tables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// Serialization needs at least a header row
    #[error("Cannot serialize a table without a header row")]
    NoHeader,
}

/// One table row; scalars coerce to a single-column row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(pub Vec<String>);

impl Row {
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl From<Vec<&str>> for Row {
    fn from(cells: Vec<&str>) -> Self {
        Self(cells.into_iter().map(ToString::to_string).collect())
    }
}

impl From<String> for Row {
    fn from(cell: String) -> Self {
        Self(vec![cell])
    }
}

impl From<&str> for Row {
    fn from(cell: &str) -> Self {
        Self(vec![cell.to_string()])
    }
}

/// Serialized table text plus the warnings gathered on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableText {
    pub text: String,
    pub warnings: Vec<String>,
}

fn line(cells: &[String]) -> String {
    format!("{}{LINE_END}", cells.join("\t"))
}

/// Serialize a header row plus data rows into delimited text.
///
/// The first row fixes the column count. Body rows with a different width
/// are skipped, each leaving one warning behind; a header-only table gets a
/// placeholder body of one space per header column so the host still sees a
/// data line.
///
/// # Errors
/// Returns `TableError::NoHeader` when `rows` is empty.
pub fn serialize<R: Into<Row>>(rows: impl IntoIterator<Item = R>) -> Result<TableText, TableError> {
    let mut iter = rows.into_iter().map(Into::into);
    let header = iter.next().ok_or(TableError::NoHeader)?;
    let width = header.width();
    let head_line = line(&header.0);

    let mut warnings = Vec::new();
    let mut body = String::new();
    let mut saw_rows = false;
    for (index, row) in iter.enumerate() {
        saw_rows = true;
        if row.width() == width {
            body.push_str(&line(&row.0));
        } else {
            warnings.push(format!(
                "Line {index} in text: [{}] does not have same length as header [{}], will be skipped",
                row.0.join(", "),
                header.0.join(", ")
            ));
        }
    }
    if !saw_rows {
        body = " ".repeat(width);
    }

    Ok(TableText { text: format!("{head_line}{body}"), warnings })
}

fn cell_at(names: &[String], index: usize) -> String {
    names.get(index).cloned().unwrap_or_else(|| {
        log::debug!("nothing to extract at {index}");
        " ".to_string()
    })
}

/// Pad-and-zip two name lists into two-column rows.
///
/// The shorter list is padded with a single-space cell so every row keeps
/// the two-column width.
#[must_use]
pub fn paired_rows(left: &[String], right: &[String]) -> Vec<Row> {
    let length = left.len().max(right.len());
    (0..length)
        .map(|index| Row(vec![cell_at(left, index), cell_at(right, index)]))
        .collect()
}

/// Serialize two name lists side by side under the given headings.
///
/// # Errors
/// Propagates serialization errors.
pub fn paired_table(
    left: (&str, &[String]),
    right: (&str, &[String]),
) -> Result<TableText, TableError> {
    let (left_title, left_names) = left;
    let (right_title, right_names) = right;
    let mut rows = vec![Row(vec![left_title.to_string(), right_title.to_string()])];
    rows.extend(paired_rows(left_names, right_names));
    serialize(rows)
}
