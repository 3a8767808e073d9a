pub mod types;

use async_trait::async_trait;

use self::types::{
    Context, ContextOwner, ContextsResponse, CreateContextParams, UpsertVariableParams,
};
use crate::errors::CircleError;
use crate::state::http::HttpClient;
use crate::store::sync_config::MatchStrategy;
use crate::sync::ContextStore;

#[derive(Debug, Clone)]
pub struct CircleClient {
    http: HttpClient,
    owner_id: String,
    owner_slug: String,
}

impl CircleClient {
    pub fn new(http: HttpClient, owner_id: String, owner_slug: String) -> Self {
        Self {
            http,
            owner_id,
            owner_slug,
        }
    }

    /// First page of contexts visible to the organization. Later pages are
    /// not fetched, a warning surfaces the truncation.
    pub async fn list_contexts(&self) -> Result<Vec<Context>, CircleError> {
        let Some(response) = self
            .http
            .request::<ContextsResponse>(
                "GET",
                &format!("/context?owner-slug={}", self.owner_slug),
                None,
            )
            .await?
        else {
            return Ok(Vec::new());
        };

        if response.next_page_token.is_some() {
            log::warn!("organization has more contexts than one page, only the first is used");
        }

        Ok(response.items)
    }

    /// Requests a context named `name`. The service may reject or duplicate
    /// a name that already exists, nothing is checked beforehand.
    pub async fn create_context(&self, name: &str) -> Result<(), CircleError> {
        let params = CreateContextParams {
            name: name.to_string(),
            owner: ContextOwner {
                id: self.owner_id.clone(),
                type_: "organization".to_string(),
            },
        };

        self.http
            .request::<Context>(
                "POST",
                "/context",
                Some((
                    serde_json::to_vec(&params).unwrap().into(),
                    "application/json",
                )),
            )
            .await?;

        Ok(())
    }

    /// Overwrites one environment variable in a context. Without an id
    /// nothing is sent, the variable is skipped.
    pub async fn upsert_variable(
        &self,
        context_id: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<(), CircleError> {
        let Some(context_id) = context_id else {
            log::warn!("no context resolved for variable `{name}`, skipping");
            return Ok(());
        };

        let regex = regex::Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*$").unwrap();

        if !regex.is_match(name) {
            log::warn!("variable name `{name}` may be rejected by CircleCI");
        }

        let params = UpsertVariableParams {
            value: value.to_string(),
        };

        self.http
            .request::<serde_json::Value>(
                "PUT",
                &format!("/context/{context_id}/environment-variable/{name}"),
                Some((
                    serde_json::to_vec(&params).unwrap().into(),
                    "application/json",
                )),
            )
            .await?;

        Ok(())
    }

    /// Deletes the context matching `name`, if any.
    pub async fn delete_context(
        &self,
        name: &str,
        strategy: MatchStrategy,
    ) -> Result<(), CircleError> {
        let contexts = self.list_contexts().await?;

        let Some(id) = find_context_id(&contexts, name, strategy) else {
            log::debug!("no context matching `{name}`, nothing to delete");
            return Ok(());
        };

        self.http
            .request::<serde_json::Value>("DELETE", &format!("/context/{id}"), None)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ContextStore for CircleClient {
    async fn list_contexts(&self) -> Result<Vec<Context>, CircleError> {
        self.list_contexts().await
    }

    async fn create_context(&self, name: &str) -> Result<(), CircleError> {
        self.create_context(name).await
    }

    async fn upsert_variable(
        &self,
        context_id: Option<&str>,
        name: &str,
        value: &str,
    ) -> Result<(), CircleError> {
        self.upsert_variable(context_id, name, value).await
    }
}

/// Resolves a context name to its id against an already-fetched listing.
/// First match in listing order wins.
pub fn find_context_id<'a>(
    contexts: &'a [Context],
    name: &str,
    strategy: MatchStrategy,
) -> Option<&'a str> {
    contexts
        .iter()
        .find(|context| match strategy {
            MatchStrategy::Contains => context.name.contains(name),
            MatchStrategy::Exact => context.name == name,
        })
        .map(|context| context.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(id: &str, name: &str) -> Context {
        Context {
            id: id.to_string(),
            name: name.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn contains_returns_first_match() {
        let contexts = vec![context("ctx-1", "prod"), context("ctx-2", "prod-backup")];

        assert_eq!(
            find_context_id(&contexts, "prod", MatchStrategy::Contains),
            Some("ctx-1")
        );
    }

    #[test]
    fn contains_resolves_superstring_names() {
        // the substring pitfall: `prod` resolves although no context carries
        // that exact name
        let contexts = vec![context("ctx-2", "prod-backup")];

        assert_eq!(
            find_context_id(&contexts, "prod", MatchStrategy::Contains),
            Some("ctx-2")
        );
    }

    #[test]
    fn exact_skips_superstring_names() {
        let contexts = vec![context("ctx-2", "prod-backup"), context("ctx-1", "prod")];

        assert_eq!(
            find_context_id(&contexts, "prod", MatchStrategy::Exact),
            Some("ctx-1")
        );
    }

    #[test]
    fn no_match_resolves_to_none() {
        let contexts = vec![context("ctx-1", "staging")];

        assert_eq!(
            find_context_id(&contexts, "prod", MatchStrategy::Contains),
            None
        );
    }

    #[tokio::test]
    async fn upsert_without_id_makes_no_request() {
        // unroutable base url, an attempted request would fail loudly
        let http = HttpClient::new(None, Some("http://127.0.0.1:0".to_string()));
        let circle = CircleClient::new(http, "owner".to_string(), "gh/acme".to_string());

        circle
            .upsert_variable(None, "API_KEY", "abc123")
            .await
            .unwrap();
    }

    #[test]
    fn context_listing_deserializes() {
        let json = r#"{"items":[{"id":"c1","name":"prod","created_at":"2023-01-05T00:00:00Z"}],"next_page_token":null}"#;
        let response: ContextsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.items[0].name, "prod");
        assert_eq!(response.items[0].id, "c1");
        assert!(response.next_page_token.is_none());
    }
}
