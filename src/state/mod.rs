pub mod http;

use anyhow::{ensure, Context as _, Result};

use self::http::HttpClient;
use crate::circle::CircleClient;
use crate::store::sync_config::SyncConfig;
use crate::vault::VaultClient;

#[derive(Debug)]
pub struct State {
    pub config: SyncConfig,
    pub http: HttpClient,
    pub vault: VaultClient,
    token: Option<String>,
}

pub struct StateOptions {
    pub override_profile: Option<String>,
    pub override_token: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let mut config = SyncConfig::new().await?;

        // the cli flag wins over the stored profile
        if let Some(profile) = options.override_profile {
            config.profile = Some(profile);
        }

        // prefer the env token over the stored one
        let token = options
            .override_token
            .or_else(|| config.circle_token.clone());

        let http = HttpClient::new(token.clone(), std::env::var("CIRCLE_API_URL").ok());
        let vault = VaultClient::new(config.profile.as_deref(), config.region.as_deref()).await;

        Ok(State {
            config,
            http,
            vault,
            token,
        })
    }

    /// CircleCI client scoped to the configured organization.
    pub fn circle(&self) -> Result<CircleClient> {
        ensure!(
            self.token.is_some(),
            "No CircleCI token found. Set `circle_token` in the config or export CIRCLE_TOKEN."
        );

        let owner_id = self
            .config
            .owner_id
            .clone()
            .context("`owner_id` is not set in the config")?;

        let owner_slug = self
            .config
            .owner_slug
            .clone()
            .context("`owner_slug` is not set in the config")?;

        Ok(CircleClient::new(self.http.clone(), owner_id, owner_slug))
    }
}
