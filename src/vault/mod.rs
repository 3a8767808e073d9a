pub mod types;

use std::collections::BTreeMap;

use async_trait::async_trait;
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType};
use aws_sdk_secretsmanager::Client;

use self::types::SecretDescriptor;
use crate::errors::VaultError;
use crate::sync::SecretStore;

/// One secret's environment variable pairs, key-sorted.
pub type SecretPayload = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct VaultClient {
    client: Client,
}

impl VaultClient {
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region.to_string()));
        }

        let config = loader.load().await;

        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl SecretStore for VaultClient {
    async fn list_secrets(&self, tags: &[String]) -> Result<Vec<SecretDescriptor>, VaultError> {
        let filter = Filter::builder()
            .key(FilterNameStringType::TagKey)
            .set_values(Some(tags.to_vec()))
            .build();

        let response = self
            .client
            .list_secrets()
            .filters(filter)
            .max_results(100)
            .send()
            .await
            .map_err(|err| VaultError::List(err.to_string()))?;

        if response.next_token().is_some() {
            log::debug!("more than one page of secrets, only the first 100 are synced");
        }

        let secrets = response
            .secret_list()
            .iter()
            .filter_map(|entry| {
                let Some(name) = entry.name() else {
                    log::warn!("skipping a listed secret with no name");
                    return None;
                };

                Some(SecretDescriptor {
                    name: name.to_string(),
                    tags: entry
                        .tags()
                        .iter()
                        .filter_map(|tag| tag.key().map(ToString::to_string))
                        .collect(),
                })
            })
            .collect();

        Ok(secrets)
    }

    async fn secret_payload(&self, name: &str) -> Result<SecretPayload, VaultError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| VaultError::Read {
                name: name.to_string(),
                message: err.to_string(),
            })?;

        let raw = response
            .secret_string()
            .ok_or_else(|| VaultError::MalformedPayload {
                name: name.to_string(),
                reason: "secret holds no string value".to_string(),
            })?;

        parse_payload(name, raw)
    }
}

/// Parses a secret's string value into environment variable pairs.
pub fn parse_payload(name: &str, raw: &str) -> Result<SecretPayload, VaultError> {
    serde_json::from_str(raw).map_err(|err| VaultError::MalformedPayload {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_flat_string_map() {
        let payload =
            parse_payload("deploy", r#"{"API_KEY":"abc123","REGION":"us-east-1"}"#).unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload["API_KEY"], "abc123");
        assert_eq!(payload["REGION"], "us-east-1");
    }

    #[test]
    fn payload_iterates_in_key_order() {
        let payload = parse_payload("deploy", r#"{"ZONE":"b","API_KEY":"a"}"#).unwrap();
        let keys: Vec<_> = payload.keys().collect();

        assert_eq!(keys, ["API_KEY", "ZONE"]);
    }

    #[test]
    fn nested_payload_is_malformed() {
        let err = parse_payload("deploy", r#"{"nested":{"a":"b"}}"#).unwrap_err();

        assert!(matches!(err, VaultError::MalformedPayload { .. }));
    }

    #[test]
    fn numeric_value_is_malformed() {
        let err = parse_payload("deploy", r#"{"PORT":8080}"#).unwrap_err();

        assert!(matches!(err, VaultError::MalformedPayload { .. }));
    }

    #[test]
    fn non_json_payload_is_malformed() {
        let err = parse_payload("deploy", "just a plain string").unwrap_err();

        assert!(matches!(err, VaultError::MalformedPayload { .. }));
    }

    #[test]
    fn array_payload_is_malformed() {
        let err = parse_payload("deploy", r#"["a","b"]"#).unwrap_err();

        assert!(matches!(err, VaultError::MalformedPayload { .. }));
    }
}
