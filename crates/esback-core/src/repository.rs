//! Snapshot repository descriptor

use serde::{Deserialize, Serialize};

/// A snapshot repository as registered with the cluster.
///
/// `settings` is passed through to the cluster verbatim; this tool never
/// interprets or reconciles it against an already-registered repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl RepositoryDescriptor {
    pub fn new(kind: String, settings: serde_json::Value) -> Self {
        Self { kind, settings }
    }

    /// Whether the descriptor carries enough to register a new repository.
    /// Creating a repository with no settings is rejected before any PUT.
    pub fn has_settings(&self) -> bool {
        match &self.settings {
            serde_json::Value::Null => false,
            serde_json::Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format_uses_type_key() {
        let repo = RepositoryDescriptor::new(
            "fs".to_string(),
            json!({"location": "/var/backups/es"}),
        );
        let encoded = serde_json::to_value(&repo).unwrap();
        assert_eq!(encoded["type"], "fs");
        assert_eq!(encoded["settings"]["location"], "/var/backups/es");
    }

    #[test]
    fn test_empty_settings_detected() {
        assert!(!RepositoryDescriptor::new("fs".into(), json!(null)).has_settings());
        assert!(!RepositoryDescriptor::new("fs".into(), json!({})).has_settings());
        assert!(RepositoryDescriptor::new("fs".into(), json!({"location": "/x"})).has_settings());
    }
}
