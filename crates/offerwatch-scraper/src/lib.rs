pub mod client;
pub mod error;
pub mod extract;
mod retry;
pub mod types;

pub use client::CatalogClient;
pub use error::{ExtractError, FetchError};
pub use extract::{extract, FEATURED_MARKER};
pub use types::{CatalogRecord, CatalogResponse, PackageEntry};
