//! Confirmed bulk deletion.

use crate::host::{HostError, NamedCollection, NamedItem};
use crate::interact::{ConfirmationGate, Notifier};
use crate::patterns::{NamePattern, match_names};

use super::core::{
    ItemKind, MutationAction, MutationOutcome, MutationReport, NameSpec, SkipReason, Skipped,
    applied_notice, confirmation_prompt, declined_notice, empty_match_notice,
};

/// Delete the named items after one confirmation round-trip.
///
/// The normalized name list is the match set: names that turn out to be
/// missing at apply time become per-item skip entries, never a batch
/// failure. Exactly one notification reports the outcome. Re-running after
/// a successful apply is harmless; every name simply reports as missing.
pub fn delete_named<C: NamedCollection>(
    collection: &mut C,
    kind: ItemKind,
    names: impl Into<NameSpec>,
    gate: &dyn ConfirmationGate,
    notifier: &dyn Notifier,
) -> MutationReport {
    let names = names.into().into_names();
    log::debug!("about to delete {}: {}", kind.plural(), crate::fmt::bracketed(&names));
    run_delete(collection, kind, names, gate, notifier)
}

/// Delete every item whose name matches `pattern`.
///
/// The match set is computed once, shown to the gate verbatim and applied
/// unchanged; the collection is never re-scanned between the confirmation
/// and the apply step.
pub fn delete_matching<C: NamedCollection>(
    collection: &mut C,
    kind: ItemKind,
    pattern: &NamePattern,
    gate: &dyn ConfirmationGate,
    notifier: &dyn Notifier,
) -> MutationReport {
    let matched = match_names(&collection.names(), pattern);
    run_delete(collection, kind, matched, gate, notifier)
}

/// Delete everything in the collection, still behind the gate.
pub fn delete_all<C: NamedCollection>(
    collection: &mut C,
    kind: ItemKind,
    gate: &dyn ConfirmationGate,
    notifier: &dyn Notifier,
) -> MutationReport {
    let names = collection.names();
    run_delete(collection, kind, names, gate, notifier)
}

fn run_delete<C: NamedCollection>(
    collection: &mut C,
    kind: ItemKind,
    matched: Vec<String>,
    gate: &dyn ConfirmationGate,
    notifier: &dyn Notifier,
) -> MutationReport {
    if matched.is_empty() {
        let (message, heading) = empty_match_notice(MutationAction::Delete, kind);
        notifier.info(&message, &heading);
        return MutationReport::empty();
    }

    let (message, heading) = confirmation_prompt(MutationAction::Delete, kind, &matched);
    if !gate.confirm(&message, &heading) {
        let (message, heading) = declined_notice(MutationAction::Delete, kind, &matched);
        notifier.info(&message, &heading);
        return MutationReport::declined(matched);
    }

    let mut report = MutationReport {
        outcome: MutationOutcome::Applied,
        matched: matched.clone(),
        applied: Vec::new(),
        skipped: Vec::new(),
    };
    for name in &matched {
        match collection.remove(&NamedItem::new(name.clone())) {
            Ok(()) => report.applied.push(name.clone()),
            Err(e) => {
                log::warn!("could not delete {name}: {e}");
                let reason = match e {
                    HostError::NotFound { .. } => SkipReason::Missing,
                    other => SkipReason::Failed(other.to_string()),
                };
                report.skipped.push(Skipped { name: name.clone(), reason });
            }
        }
    }

    let (message, heading) = applied_notice(MutationAction::Delete, kind, &report);
    notifier.info(&message, &heading);
    report
}
