use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::fmt::bracketed;

/// Kind of document item a bulk operation is aimed at, used in prompts and
/// notice headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Page,
    Table,
    Column,
    Row,
    Visual,
}

impl ItemKind {
    /// Plural form used in headings and prompts.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Page => "pages",
            Self::Table => "tables",
            Self::Column => "columns",
            Self::Row => "rows",
            Self::Visual => "visuals",
        }
    }
}

/// Error for an unrecognized item-kind selector
#[derive(Debug, Error)]
#[error("'{given}' is not a valid item kind, choose among [column, page, row, table, visual]")]
pub struct UnknownKindError {
    pub given: String,
}

impl FromStr for ItemKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(Self::Page),
            "table" => Ok(Self::Table),
            "column" => Ok(Self::Column),
            "row" => Ok(Self::Row),
            "visual" | "viz" => Ok(Self::Visual),
            other => Err(UnknownKindError { given: other.to_string() }),
        }
    }
}

/// Action applied by the executor (used to phrase prompts and notices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Delete,
    Rename,
}

impl MutationAction {
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Rename => "rename",
        }
    }

    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Delete => "deletion",
            Self::Rename => "renaming",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Delete => "Deletion",
            Self::Rename => "Renaming",
        }
    }
}

/// Names fed into a bulk operation; a bare name becomes a one-element
/// sequence through the `From` conversions, exactly once, before matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpec(Vec<String>);

impl NameSpec {
    /// The normalized name list.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for NameSpec {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for NameSpec {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for NameSpec {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for NameSpec {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(ToString::to_string).collect())
    }
}

impl From<&[&str]> for NameSpec {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(ToString::to_string).collect())
    }
}

/// Why a matched item was left untouched during apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The item vanished between matching and applying
    Missing,
    /// No entry for the item in the rename mapping
    Unmapped,
    /// The host refused the mutation
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no longer present"),
            Self::Unmapped => write!(f, "not in the rename mapping"),
            Self::Failed(reason) => write!(f, "{reason}"),
        }
    }
}

/// One matched item that was not mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: SkipReason,
}

/// How a bulk mutation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The gate approved and the mutation ran
    Applied,
    /// The gate declined; nothing was touched
    Declined,
    /// Nothing matched; the gate was never asked
    NothingMatched,
}

/// Result of one bulk mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub outcome: MutationOutcome,
    /// The match set shown to the gate; exactly the set apply walked
    pub matched: Vec<String>,
    /// Names actually mutated
    pub applied: Vec<String>,
    /// Matched names left untouched, with the reason for each
    pub skipped: Vec<Skipped>,
}

impl MutationReport {
    pub(crate) const fn empty() -> Self {
        Self {
            outcome: MutationOutcome::NothingMatched,
            matched: Vec::new(),
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) const fn declined(matched: Vec<String>) -> Self {
        Self {
            outcome: MutationOutcome::Declined,
            matched,
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome == MutationOutcome::Applied
    }
}

pub(crate) fn confirmation_prompt(
    action: MutationAction,
    kind: ItemKind,
    names: &[String],
) -> (String, String) {
    let heading = format!("{} of {}", action.title(), kind.plural());
    let message = format!(
        "You are about to {} the following items\n{}\ndo you want to proceed?",
        action.verb(),
        bracketed(names)
    );
    (message, heading)
}

pub(crate) fn declined_notice(
    action: MutationAction,
    kind: ItemKind,
    names: &[String],
) -> (String, String) {
    let heading = format!("No {}", action.noun());
    let message = format!(
        "You decided not to {} {} {}",
        action.verb(),
        bracketed(names),
        kind.plural()
    );
    (message, heading)
}

pub(crate) fn empty_match_notice(action: MutationAction, kind: ItemKind) -> (String, String) {
    let heading = "Nothing matched".to_string();
    let message = format!("No {} to {}", kind.plural(), action.verb());
    (message, heading)
}

pub(crate) fn applied_notice(
    action: MutationAction,
    kind: ItemKind,
    report: &MutationReport,
) -> (String, String) {
    let heading = format!("{} of {}", action.title(), kind.plural());
    let mut message = format!("Applied {} to {}", action.noun(), bracketed(&report.applied));
    for skip in &report.skipped {
        message.push_str(&format!("\nSkipped {}: {}", skip.name, skip.reason));
    }
    (message, heading)
}
