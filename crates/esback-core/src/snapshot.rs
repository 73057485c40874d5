//! Snapshot records, naming and retention selection

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Per-snapshot state as reported by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotState {
    Success,
    InProgress,
    Started,
    Partial,
    Failed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SnapshotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SnapshotState::Success => "SUCCESS",
            SnapshotState::InProgress => "IN_PROGRESS",
            SnapshotState::Started => "STARTED",
            SnapshotState::Partial => "PARTIAL",
            SnapshotState::Failed => "FAILED",
            SnapshotState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// A snapshot as it appears in the cluster's listing.
///
/// The cluster returns snapshots in creation order; that order is
/// authoritative and is never re-sorted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "snapshot")]
    pub name: String,
    pub state: SnapshotState,
}

impl SnapshotRecord {
    pub fn new(name: impl Into<String>, state: SnapshotState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}

const NAME_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]");

/// Derive the snapshot name for a run: `<prefix>-<YYYY-MM-DD_HH-mm>`.
///
/// Minute granularity is deliberate: a rerun within the same minute
/// resolves to the same name and becomes an idempotent no-op.
pub fn snapshot_name(prefix: &str, at: OffsetDateTime) -> String {
    // The format description is static, formatting it cannot fail.
    let stamp = at.format(NAME_STAMP).unwrap_or_default();
    format!("{prefix}-{stamp}")
}

/// Current local time, falling back to UTC when the local offset
/// cannot be determined (e.g. in multi-threaded processes on Unix).
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Select the snapshots to delete so that at most `retain` prefixed
/// snapshots remain, oldest first by the cluster's listing order.
pub fn prune_candidates<'a>(
    snapshots: &'a [SnapshotRecord],
    prefix: &str,
    retain: usize,
) -> Vec<&'a SnapshotRecord> {
    let matched: Vec<&SnapshotRecord> = snapshots
        .iter()
        .filter(|s| s.name.starts_with(prefix))
        .collect();
    let excess = matched.len().saturating_sub(retain);
    matched.into_iter().take(excess).collect()
}
