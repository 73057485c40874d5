//! Cluster health domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of the cluster as reported by `/_cluster/health`.
///
/// Anything the cluster reports that is not green/yellow/red collapses
/// into `Unknown`, which is treated the same as an unreachable cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterHealth {
    Green,
    Yellow,
    Red,
    #[serde(other)]
    Unknown,
}

impl ClusterHealth {
    /// Only green and yellow clusters accept new snapshots.
    pub fn is_operational(self) -> bool {
        matches!(self, ClusterHealth::Green | ClusterHealth::Yellow)
    }
}

impl From<&str> for ClusterHealth {
    fn from(status: &str) -> Self {
        match status {
            "green" => ClusterHealth::Green,
            "yellow" => ClusterHealth::Yellow,
            "red" => ClusterHealth::Red,
            _ => ClusterHealth::Unknown,
        }
    }
}

impl fmt::Display for ClusterHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClusterHealth::Green => "green",
            ClusterHealth::Yellow => "yellow",
            ClusterHealth::Red => "red",
            ClusterHealth::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_statuses() {
        assert!(ClusterHealth::Green.is_operational());
        assert!(ClusterHealth::Yellow.is_operational());
        assert!(!ClusterHealth::Red.is_operational());
        assert!(!ClusterHealth::Unknown.is_operational());
    }

    #[test]
    fn test_from_status_string() {
        assert_eq!(ClusterHealth::from("green"), ClusterHealth::Green);
        assert_eq!(ClusterHealth::from("yellow"), ClusterHealth::Yellow);
        assert_eq!(ClusterHealth::from("red"), ClusterHealth::Red);
        assert_eq!(ClusterHealth::from("purple"), ClusterHealth::Unknown);
        assert_eq!(ClusterHealth::from(""), ClusterHealth::Unknown);
    }
}
