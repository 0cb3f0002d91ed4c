//! Extraction of the cheapest featured offer per item.
//!
//! Turns the raw record list into a [`Snapshot`]: filter to featured
//! records, resolve each record's display name, reduce its availability
//! end, and keep the cheapest detail per resolved name. Pure function over
//! its input; no network or storage access.

use chrono::NaiveDateTime;
use offerwatch_core::{OfferDetail, Snapshot};

use crate::error::ExtractError;
use crate::types::CatalogRecord;

/// Marker substring identifying limited-time offers among the category
/// tags. Matched case-sensitively, by containment.
pub const FEATURED_MARKER: &str = "featured";

/// Wire format of `nonselling_time`.
const AVAILABILITY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Month-day hour-minute rendering kept in the snapshot.
const ENDS_FORMAT: &str = "%m-%dT%H:%M";

/// Extracts the cheapest-per-item snapshot from a raw record list.
///
/// Records whose `categories` lack [`FEATURED_MARKER`] are skipped before
/// any validation. For qualifying records the display name comes from the
/// first bundle entry's `vehicle_name` when a non-empty `package_content`
/// exists, else from the record's own `name`. Per resolved name the detail
/// with the smallest `price` *string* survives; ties keep the first
/// writer. Raw-text ordering ranks `"100"` below `"99"`, so prices of
/// unequal digit count dedup by their leading characters, not their
/// numeric value.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedRecord`] for the first qualifying
/// record with no resolvable name, a `package_content` that is present but
/// empty, a missing `price`, or a missing/unparseable `nonselling_time`.
/// One malformed record fails the whole extraction.
pub fn extract(records: &[CatalogRecord]) -> Result<Snapshot, ExtractError> {
    let mut snapshot = Snapshot::new();

    for (index, record) in records.iter().enumerate() {
        let featured = record
            .categories
            .as_deref()
            .is_some_and(|tags| tags.contains(FEATURED_MARKER));
        if !featured {
            continue;
        }

        let name = resolve_name(record).map_err(|reason| malformed(index, reason))?;
        let price = record
            .price
            .clone()
            .ok_or_else(|| malformed(index, "missing price".to_string()))?;
        let raw_end = record
            .nonselling_time
            .as_deref()
            .ok_or_else(|| malformed(index, "missing nonselling_time".to_string()))?;
        let ends = reduce_availability_end(raw_end).map_err(|reason| malformed(index, reason))?;

        let candidate = OfferDetail { price, ends };
        match snapshot.get(&name) {
            // Existing detail is at least as cheap (raw-text order): keep it.
            Some(existing) if existing.price <= candidate.price => {}
            _ => {
                snapshot.insert(name, candidate);
            }
        }
    }

    Ok(snapshot)
}

fn malformed(index: usize, reason: String) -> ExtractError {
    ExtractError::MalformedRecord { index, reason }
}

/// Resolves the display name for a qualifying record.
///
/// A present, non-empty `package_content` prefers the first entry's
/// `vehicle_name`; an entry without one falls back to the record's `name`.
fn resolve_name(record: &CatalogRecord) -> Result<String, String> {
    match record.package_content.as_deref() {
        Some([]) => Err("package_content is present but empty".to_string()),
        Some([first, ..]) => match &first.vehicle_name {
            Some(name) => Ok(name.clone()),
            None => record
                .name
                .clone()
                .ok_or_else(|| "no bundle name and no record name".to_string()),
        },
        None => record
            .name
            .clone()
            .ok_or_else(|| "missing name".to_string()),
    }
}

/// Reduces a full availability timestamp to its `MM-DDTHH:MM` form.
///
/// Parsing with the known wire format rejects malformed input instead of
/// slicing at fixed byte offsets.
fn reduce_availability_end(raw: &str) -> Result<String, String> {
    NaiveDateTime::parse_from_str(raw, AVAILABILITY_FORMAT)
        .map(|ts| ts.format(ENDS_FORMAT).to_string())
        .map_err(|e| format!("nonselling_time {raw:?} does not match {AVAILABILITY_FORMAT}: {e}"))
}
