use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("could not list secrets from the vault: {0}")]
    List(String),

    #[error("could not read secret `{name}`: {message}")]
    Read { name: String, message: String },

    #[error("secret `{name}` does not hold a flat key/value map: {reason}")]
    MalformedPayload { name: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CircleError {
    #[error("CircleCI returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Circle(#[from] CircleError),
}
