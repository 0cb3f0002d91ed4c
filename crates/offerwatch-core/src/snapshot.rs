use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The best (cheapest) known offer for a single catalog item.
///
/// Immutable once constructed; two details are equal iff both fields are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDetail {
    /// Price as a decimal string, exactly as the catalog returns it,
    /// e.g. `"8800"`. Kept textual so dedup compares what the storefront
    /// displays; see [`crate::diff`] and the extractor for the ordering
    /// caveats this implies.
    pub price: String,

    /// Reduced end-of-availability timestamp, `MM-DDTHH:MM`,
    /// e.g. `"01-05T10:00"`.
    pub ends: String,
}

/// Per-run mapping from item display name to its best offer.
///
/// An ordered map: report rows and summary fragments come out in name
/// order, so rendered output is stable across runs with the same content.
/// Identity for diffing purposes is the key set plus each key's detail.
pub type Snapshot = BTreeMap<String, OfferDetail>;

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(price: &str, ends: &str) -> OfferDetail {
        OfferDetail {
            price: price.to_string(),
            ends: ends.to_string(),
        }
    }

    #[test]
    fn details_equal_when_both_fields_match() {
        assert_eq!(detail("8800", "01-05T10:00"), detail("8800", "01-05T10:00"));
    }

    #[test]
    fn details_differ_on_price() {
        assert_ne!(detail("8800", "01-05T10:00"), detail("9900", "01-05T10:00"));
    }

    #[test]
    fn details_differ_on_ends() {
        assert_ne!(detail("8800", "01-05T10:00"), detail("8800", "02-01T00:00"));
    }

    #[test]
    fn serde_roundtrip_detail() {
        let d = detail("8800", "01-05T10:00");
        let json = serde_json::to_string(&d).expect("serialization failed");
        let decoded: OfferDetail = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded, d);
    }

    #[test]
    fn snapshot_iterates_in_name_order() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("Zeta".to_string(), detail("2", "01-01T00:00"));
        snapshot.insert("Alpha".to_string(), detail("1", "01-01T00:00"));
        let names: Vec<&str> = snapshot.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
