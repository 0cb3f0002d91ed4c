//! Bounded-length broadcast text for a snapshot.

use unicode_width::UnicodeWidthStr;

use crate::snapshot::Snapshot;

/// Hard display-width limit of the broadcast channel.
const WIDTH_LIMIT: usize = 280;

/// Characters kept when the limit is exceeded.
const TRUNCATE_CHARS: usize = 275;

/// Marker appended after truncation.
const ELLIPSIS: &str = "...";

/// Formats a snapshot as one `|name:￥price|` fragment per item, in name
/// order, bounded for a 280-unit channel.
///
/// The bound is checked in display-width units; truncation counts
/// characters (`TRUNCATE_CHARS` of them, plus the ellipsis). The mismatch
/// between the two measurements is inherited behavior. An empty snapshot
/// yields the empty string.
#[must_use]
pub fn format_broadcast(snapshot: &Snapshot) -> String {
    let mut text = String::new();
    for (name, detail) in snapshot {
        text.push_str(&format!("|{name}:￥{}|", detail.price));
    }

    if UnicodeWidthStr::width(text.as_str()) > WIDTH_LIMIT {
        let mut truncated: String = text.chars().take(TRUNCATE_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        return truncated;
    }
    text
}
