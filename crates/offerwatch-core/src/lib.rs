pub mod app_config;
pub mod config;
pub mod diff;
pub mod error;
pub mod report;
pub mod snapshot;
pub mod summary;

pub use app_config::AppConfig;
pub use config::{load_config, load_config_from_env};
pub use diff::snapshots_differ;
pub use error::ConfigError;
pub use report::render;
pub use snapshot::{OfferDetail, Snapshot};
pub use summary::format_broadcast;
