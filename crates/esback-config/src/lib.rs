use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for esback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_cluster_url")]
    pub cluster_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Chat webhook for run reports; notifications are skipped when unset.
    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_name")]
    pub name: String,

    #[serde(default = "default_repository_kind")]
    pub kind: String,

    /// Passed to the cluster verbatim when the repository is created.
    #[serde(default = "default_settings")]
    pub settings: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Number of prefixed snapshots to keep; older ones are pruned.
    #[serde(default = "default_retain")]
    pub retain: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_url: default_cluster_url(),
            timeout_secs: default_timeout_secs(),
            webhook_url: None,
            repository: RepositoryConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            name: default_repository_name(),
            kind: default_repository_kind(),
            settings: default_settings(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            retain: default_retain(),
        }
    }
}

fn default_cluster_url() -> String {
    "http://127.0.0.1:9200".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_repository_name() -> String {
    "es_backup".to_string()
}

fn default_repository_kind() -> String {
    "fs".to_string()
}

fn default_settings() -> serde_json::Value {
    // Empty by default; repository creation refuses to run without settings.
    serde_json::Value::Object(serde_json::Map::new())
}

fn default_prefix() -> String {
    "elasticbackup".to_string()
}

fn default_retain() -> usize {
    48
}

impl Config {
    /// Load config from an explicit path, or from the default location
    /// (creating a default file there if none exists yet).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                let content = std::fs::read_to_string(path)?;
                let config: Config = toml::from_str(&content)?;
                Ok(config)
            }
            None => {
                let path = Self::config_path();
                if path.exists() {
                    let content = std::fs::read_to_string(&path)?;
                    let config: Config = toml::from_str(&content)?;
                    Ok(config)
                } else {
                    // Create default config file
                    let config = Config::default();
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    let content = toml::to_string_pretty(&config)?;
                    std::fs::write(&path, content)?;
                    Ok(config)
                }
            }
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "esback", "esback") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.esback/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cluster_url, "http://127.0.0.1:9200");
        assert_eq!(config.snapshot.prefix, "elasticbackup");
        assert_eq!(config.snapshot.retain, 48);
        assert_eq!(config.repository.kind, "fs");
        assert!(config.webhook_url.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.snapshot.retain, config.snapshot.retain);
        assert_eq!(parsed.repository.name, config.repository.name);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            cluster_url = "http://es01:9200"

            [snapshot]
            retain = 10
            "#,
        )
        .unwrap();
        assert_eq!(parsed.cluster_url, "http://es01:9200");
        assert_eq!(parsed.snapshot.retain, 10);
        assert_eq!(parsed.snapshot.prefix, "elasticbackup");
        assert_eq!(parsed.repository.name, "es_backup");
    }

    #[test]
    fn test_repository_settings_pass_through() {
        let parsed: Config = toml::from_str(
            r#"
            [repository]
            name = "nightly"
            kind = "fs"

            [repository.settings]
            location = "/var/backups/es"
            compress = true
            "#,
        )
        .unwrap();
        assert_eq!(parsed.repository.settings["location"], "/var/backups/es");
        assert_eq!(parsed.repository.settings["compress"], true);
    }
}
