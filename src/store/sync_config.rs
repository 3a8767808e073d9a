use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::home_path;
use crate::config::{CONFIG_STORE_PATH, DEFAULT_SYNC_TAG};

/// How a secret name is matched against context names when resolving ids.
///
/// `Contains` is the historical behavior: the first context whose name
/// merely contains the secret name wins, so `prod` can resolve to
/// `prod-backup` when no context is named `prod` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Contains,
    Exact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// AWS profile holding Secrets Manager access. Falls back to the
    /// default credential chain when unset.
    pub profile: Option<String>,

    /// AWS region the secrets live in.
    pub region: Option<String>,

    /// CircleCI personal API token. `CIRCLE_TOKEN` takes precedence.
    pub circle_token: Option<String>,

    /// Organization id contexts are created under.
    pub owner_id: Option<String>,

    /// `vcs/org` slug used when listing contexts.
    pub owner_slug: Option<String>,

    /// Tags a secret must carry to take part in the sync.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// How secret names are matched against context names.
    #[serde(rename = "match", default)]
    pub context_match: MatchStrategy,
}

fn default_tags() -> Vec<String> {
    vec![DEFAULT_SYNC_TAG.to_string()]
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            profile: None,
            region: None,
            circle_token: None,
            owner_id: None,
            owner_slug: None,
            tags: default_tags(),
            context_match: MatchStrategy::default(),
        }
    }
}

impl SyncConfig {
    fn path() -> Result<PathBuf> {
        home_path(CONFIG_STORE_PATH)
    }

    pub async fn new() -> Result<Self> {
        let path = Self::path()?;

        if fs::metadata(&path).await.is_err() {
            let config = Self::default();
            config.save().await?;

            log::warn!(
                "Created a default config at {}, fill it in before syncing",
                path.display()
            );

            return Ok(config);
        }

        Self::from_path(&path).await
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let buffer = fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read config at {}", path.display()))?;

        serde_json::from_str(&buffer)
            .with_context(|| format!("Could not parse config at {}", path.display()))
    }

    pub async fn save(&self) -> Result<()> {
        let path = Self::path()?;

        fs::create_dir_all(path.parent().context("Config path has no parent")?)
            .await
            .context("Failed to create config directory")?;

        fs::write(&path, serde_json::to_string_pretty(self)?)
            .await
            .with_context(|| format!("Could not write config at {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"circle_token":"tok"}"#).await.unwrap();

        let config = SyncConfig::from_path(&path).await.unwrap();

        assert_eq!(config.circle_token.as_deref(), Some("tok"));
        assert_eq!(config.tags, vec![DEFAULT_SYNC_TAG.to_string()]);
        assert_eq!(config.context_match, MatchStrategy::Contains);
        assert!(config.profile.is_none());
    }

    #[tokio::test]
    async fn match_strategy_parses_lowercase_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"match":"exact"}"#).await.unwrap();

        let config = SyncConfig::from_path(&path).await.unwrap();

        assert_eq!(config.context_match, MatchStrategy::Exact);
    }

    #[tokio::test]
    async fn garbage_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").await.unwrap();

        assert!(SyncConfig::from_path(&path).await.is_err());
    }

    #[test]
    fn default_config_round_trips() {
        let config = SyncConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SyncConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.tags, config.tags);
        assert_eq!(back.context_match, config.context_match);
    }
}
