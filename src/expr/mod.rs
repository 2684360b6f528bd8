//! Axis-expression compiler.
//!
//! Folds a list of curve names and a list of statistic qualifiers into the
//! nested expression string a chart axis expects, e.g.
//! `Avg([WOPR]), Avg([WWCT])`.

use thiserror::Error;

/// Errors produced while compiling expressions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExprError {
    /// No names to compile
    #[error("Cannot compile an expression from an empty name list")]
    EmptyOperand,
}

/// Wrap a single name with its qualifier.
///
/// `Avg` + `WOPR` gives `Avg([WOPR])`; an empty qualifier gives `[WOPR]`.
#[must_use]
pub fn part(name: &str, qualifier: &str) -> String {
    if qualifier.is_empty() {
        format!("[{name}]")
    } else {
        format!("{qualifier}([{name}])")
    }
}

/// Fold every name with one shared qualifier.
///
/// Recurses over all but the last name, then appends the last, so names keep
/// their original order; the caller's slice is never mutated.
///
/// # Errors
/// Returns `ExprError::EmptyOperand` when `names` is empty.
pub fn fold_with_qualifier(names: &[String], qualifier: &str) -> Result<String, ExprError> {
    match names.split_last() {
        None => Err(ExprError::EmptyOperand),
        Some((last, [])) => Ok(part(last, qualifier)),
        Some((last, rest)) => {
            let folded = fold_with_qualifier(rest, qualifier)?;
            Ok(format!("{folded}, {}", part(last, qualifier)))
        }
    }
}

/// Compile names and qualifiers into one axis expression.
///
/// The first qualifier is applied to every name; each further qualifier
/// appends another full group over all names. Qualifiers are deliberately
/// not paired positionally with names; downstream expression strings depend
/// on the shared-qualifier behaviour, so callers wanting one qualifier per
/// name must compile per name themselves.
///
/// # Errors
/// Returns `ExprError::EmptyOperand` when `names` is empty.
pub fn compile(names: &[String], qualifiers: &[String]) -> Result<String, ExprError> {
    let first = qualifiers.first().map_or("", String::as_str);
    let mut expression = fold_with_qualifier(names, first)?;
    for qualifier in qualifiers.iter().skip(1) {
        expression.push_str(", ");
        expression.push_str(&fold_with_qualifier(names, qualifier)?);
    }
    Ok(expression)
}
