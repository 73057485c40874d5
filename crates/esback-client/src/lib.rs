//! HTTP client for the Elasticsearch snapshot API
//!
//! The cluster is reached through the [`SnapshotStore`] trait so the
//! backup flow can be exercised against an in-memory store in tests;
//! [`EsClient`] is the reqwest implementation used in production.

pub mod http;
pub mod store;
pub mod types;

pub use http::EsClient;
pub use store::SnapshotStore;
