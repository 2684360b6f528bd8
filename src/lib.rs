//! Dashr - scriptable bulk edits for structured analyst documents
//!
//! This library provides the recurring logic behind analyst scripts that
//! clean up a document made of named collections (pages, data tables,
//! columns, rows, visual elements): pattern-based search with confirmed
//! bulk delete and rename, naming-convention decoding, axis-expression
//! compilation and tab-delimited table serialization.
//!
//! The live document is never touched directly. Scripts reach it through
//! the [`host::NamedCollection`] capability, ask the user through an
//! [`interact::ConfirmationGate`] and report through an
//! [`interact::Notifier`], so the same flows run against a real host
//! binding, the bundled [`host::MemoryCollection`] or test doubles.

use thiserror::Error;

pub mod config;
pub mod decode;
pub mod expr;
pub mod fmt;
pub mod host;
pub mod interact;
pub mod ops;
pub mod patterns;
pub mod table;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum DashrError {
    /// Pattern error
    #[error("Pattern error: {0}")]
    Pattern(#[from] patterns::PatternError),
    /// Decode rule selector error
    #[error("Decode error: {0}")]
    Decode(#[from] decode::UnknownRuleError),
    /// Item kind selector error
    #[error("Item kind error: {0}")]
    Kind(#[from] ops::UnknownKindError),
    /// Expression error
    #[error("Expression error: {0}")]
    Expr(#[from] expr::ExprError),
    /// Table serialization error
    #[error("Table error: {0}")]
    Table(#[from] table::TableError),
    /// Host collection error
    #[error("Host error: {0}")]
    Host(#[from] host::HostError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub use host::{NamedCollection, NamedItem};
pub use ops::{ItemKind, MutationOutcome, MutationReport};
pub use patterns::NamePattern;
