//! Core domain models and logic for esback
//!
//! This crate contains:
//! - Domain models (ClusterHealth, SnapshotRecord, RepositoryDescriptor)
//! - Snapshot naming and retention selection
//! - The error taxonomy shared by all crates

pub mod error;
pub mod health;
pub mod repository;
pub mod snapshot;

pub use error::{BackupError, Result};
pub use health::ClusterHealth;
pub use repository::RepositoryDescriptor;
pub use snapshot::{SnapshotRecord, SnapshotState, local_now, prune_candidates, snapshot_name};
