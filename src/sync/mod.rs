use async_trait::async_trait;

use crate::circle::find_context_id;
use crate::circle::types::Context;
use crate::errors::{CircleError, SyncError, VaultError};
use crate::store::sync_config::MatchStrategy;
use crate::vault::types::SecretDescriptor;
use crate::vault::SecretPayload;

/// Read side of the sync: the vault holding tagged secrets.
#[async_trait]
pub trait SecretStore {
    async fn list_secrets(&self, tags: &[String]) -> Result<Vec<SecretDescriptor>, VaultError>;
    async fn secret_payload(&self, name: &str) -> Result<SecretPayload, VaultError>;
}

/// Write side of the sync: the CI service holding contexts.
#[async_trait]
pub trait ContextStore {
    async fn list_contexts(&self) -> Result<Vec<Context>, CircleError>;
    async fn create_context(&self, name: &str) -> Result<(), CircleError>;
    async fn upsert_variable(
        &self,
        context_id: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<(), CircleError>;
}

/// Mirrors every tagged vault secret into a same-named CircleCI context.
///
/// Additive only: variables no longer present in the vault are left alone.
/// The first failure aborts the run, calls already issued are not rolled
/// back.
pub async fn run<V, C>(
    vault: &V,
    circle: &C,
    tags: &[String],
    strategy: MatchStrategy,
) -> Result<(), SyncError>
where
    V: SecretStore + Sync,
    C: ContextStore + Sync,
{
    let secrets = vault.list_secrets(tags).await?;

    for secret in &secrets {
        log::info!("Creating context: {}", secret.name);
        circle.create_context(&secret.name).await?;
    }

    // ids are assigned by the service on creation, one re-list discovers
    // them all
    let contexts = circle.list_contexts().await?;

    for secret in &secrets {
        log::info!("Updating environment variables for {}", secret.name);
        let payload = vault.secret_payload(&secret.name).await?;

        for (key, value) in &payload {
            let context_id = find_context_id(&contexts, &secret.name, strategy);
            circle.upsert_variable(context_id, key, value).await?;
        }
    }

    Ok(())
}
