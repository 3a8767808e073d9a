use serde::Deserialize;

/// Error body returned by the CircleCI v2 API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
