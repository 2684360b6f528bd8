//! Bulk mutation executor
//!
//! Every operation follows the same shape: compute the match set once, ask
//! the confirmation gate, then either apply the mutation to exactly that set
//! or report the items left untouched. Each invocation ends in a single
//! notification, whatever happened per item.

pub mod core;
pub mod delete;
pub mod mapping;
pub mod rename;


pub use core::{
    ItemKind, MutationAction, MutationOutcome, MutationReport, NameSpec, SkipReason, Skipped,
    UnknownKindError,
};
pub use delete::{delete_all, delete_matching, delete_named};
pub use mapping::{MappingFormat, RenameMap, RenameMapping, parse_csv, parse_json, parse_text};
pub use rename::rename_matching;
