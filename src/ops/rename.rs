//! Confirmed bulk renaming.

use crate::host::{HostError, NamedCollection, NamedItem};
use crate::interact::{ConfirmationGate, Notifier};
use crate::patterns::{NamePattern, match_names};

use super::core::{
    ItemKind, MutationAction, MutationOutcome, MutationReport, SkipReason, Skipped,
    applied_notice, confirmation_prompt, declined_notice, empty_match_notice,
};
use super::mapping::RenameMap;

/// Rename every matched item through the supplied mapping.
///
/// The match set is computed once, confirmed, and applied unchanged. Matched
/// names without a mapping entry are skipped, each skip reported
/// individually in the returned report; a vanished or refused rename is a
/// per-item skip as well, never a batch failure. Exactly one notification
/// reports the outcome.
///
/// Unlike delete, re-running after a successful apply is not harmless: the
/// old names no longer exist, so a second pass matches nothing, or worse,
/// matches different items that happen to share the pattern.
pub fn rename_matching<C: NamedCollection>(
    collection: &mut C,
    kind: ItemKind,
    pattern: &NamePattern,
    mapping: &RenameMap,
    gate: &dyn ConfirmationGate,
    notifier: &dyn Notifier,
) -> MutationReport {
    let matched = match_names(&collection.names(), pattern);
    if matched.is_empty() {
        let (message, heading) = empty_match_notice(MutationAction::Rename, kind);
        notifier.info(&message, &heading);
        return MutationReport::empty();
    }

    let (message, heading) = confirmation_prompt(MutationAction::Rename, kind, &matched);
    if !gate.confirm(&message, &heading) {
        let (message, heading) = declined_notice(MutationAction::Rename, kind, &matched);
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
        let Some(new_name) = mapping.get(name) else {
            log::debug!("{name} is not in the rename mapping, skipping");
            report.skipped.push(Skipped {
                name: name.clone(),
                reason: SkipReason::Unmapped,
            });
            continue;
        };
        match collection.rename(&NamedItem::new(name.clone()), new_name) {
            Ok(()) => report.applied.push(name.clone()),
            Err(e) => {
                log::warn!("could not rename {name}: {e}");
                let reason = match e {
                    HostError::NotFound { .. } => SkipReason::Missing,
                    other => SkipReason::Failed(other.to_string()),
                };
                report.skipped.push(Skipped { name: name.clone(), reason });
            }
        }
    }

    let (message, heading) = applied_notice(MutationAction::Rename, kind, &report);
    notifier.info(&message, &heading);
    report
}
