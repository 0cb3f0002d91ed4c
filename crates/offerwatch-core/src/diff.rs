//! Change detection between two snapshots.
//!
//! The policy compares only the **sets of item names**. A price or
//! end-date change for an item that stays listed does not count as a
//! change; only an item appearing or disappearing does. Callers that want
//! value-sensitive diffing must not get it silently, so the tests pin
//! this behavior down.

use crate::snapshot::Snapshot;

/// Delimiter between item names in the comparison token.
const NAME_DELIMITER: &str = "|";

/// Returns `true` when the two snapshots list different item sets.
///
/// `diff(prev, curr) == false` for identical name sets even when every
/// price differs.
#[must_use]
pub fn snapshots_differ(previous: &Snapshot, current: &Snapshot) -> bool {
    name_token(previous) != name_token(current)
}

/// Joins a snapshot's item names, sorted, into a single comparison token.
fn name_token(snapshot: &Snapshot) -> String {
    // BTreeMap keys are already in sorted order.
    snapshot
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(NAME_DELIMITER)
}
