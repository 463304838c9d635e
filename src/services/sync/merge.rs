// Merge reconciler
// Union-merge of an incoming event store into the local one

use crate::services::store::EventStore;

/// Merge `incoming` into `local` without ever overwriting.
///
/// For every incoming date, labels not already present locally are appended
/// in incoming order; existing labels are kept untouched and duplicates are
/// suppressed. Local-only dates are never modified. Returns true when at
/// least one label was newly added.
pub fn merge(local: &mut EventStore, incoming: &EventStore) -> bool {
    let mut changed = false;

    for (date, labels) in incoming {
        // Only touch the local key once there is something to add, so the
        // non-empty-list invariant holds even for empty incoming lists.
        for label in labels {
            let local_labels = local.entry(*date).or_default();
            if !local_labels.iter().any(|existing| existing == label) {
                local_labels.push(label.clone());
                changed = true;
            }
        }
    }

    changed
}
