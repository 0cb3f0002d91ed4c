//! Catalog API response types for the storefront's product-list endpoint.
//!
//! ## Observed shape
//!
//! The endpoint wraps the product list in a `data` envelope:
//! `{ "data": { "list": [record, ...] } }`.
//!
//! ### `categories`
//! A comma-joined free-text tag string, e.g. `"featured,vehicles"`. Records
//! outside the featured category are present in the list and filtered out
//! during extraction.
//!
//! ### `price`
//! A decimal string, e.g. `"8800"`. Never observed as a JSON number, but
//! individual records have been seen without it (delisted entries), so the
//! field is optional here and validated during extraction.
//!
//! ### `nonselling_time`
//! End of availability as `YYYY-MM-DDTHH:MM:SS` (no zone suffix).
//!
//! ### `package_content`
//! Bundle entries for package offers. When present and non-empty, the first
//! entry's `vehicle_name` is the display name buyers see; the record-level
//! `name` is the package label. Single-item offers omit the array entirely.
//!
//! Fields the extractor validates are modeled as `Option`s with serde
//! defaults so a missing field surfaces as a typed per-record extraction
//! error rather than failing the whole body decode.

use serde::Deserialize;

/// Top-level response from the product-list endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: CatalogData,
}

/// The `data` envelope around the record list.
#[derive(Debug, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub list: Vec<CatalogRecord>,
}

/// A single entry from the storefront's product list.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    /// Comma-joined category tags, e.g. `"featured,vehicles"`.
    #[serde(default)]
    pub categories: Option<String>,

    /// Record-level display name; the fallback when no bundle name exists.
    #[serde(default)]
    pub name: Option<String>,

    /// Price as a decimal string, e.g. `"8800"`.
    #[serde(default)]
    pub price: Option<String>,

    /// End of availability, `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default)]
    pub nonselling_time: Option<String>,

    /// Bundle entries; the first may carry the buyer-facing display name.
    #[serde(default)]
    pub package_content: Option<Vec<PackageEntry>>,
}

/// One entry of a bundle offer.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageEntry {
    /// Buyer-facing display name of the bundled item.
    #[serde(default)]
    pub vehicle_name: Option<String>,
}
