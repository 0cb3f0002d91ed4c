//! Snapshot persistence between runs.
//!
//! The snapshot survives as a single JSON file. `load` treats a missing
//! file as first-run state (empty snapshot); every other failure is an
//! error the caller must handle, since a silently lost snapshot makes the
//! next run's diff re-fire.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::SnapshotStore;
