use hyper::StatusCode;
use reqwest::header::HeaderMap;
use reqwest::Client as AsyncClient;

use crate::config::{CIRCLE_API_BASE_URL, VERSION};
use crate::errors::CircleError;
use crate::types::ErrorResponse;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub headers: HeaderMap,
    pub ua: String,
}

impl HttpClient {
    pub fn new(token: Option<String>, api_url: Option<String>) -> Self {
        let mut headers = HeaderMap::new();

        headers.insert("accept", "application/json".parse().unwrap());

        if let Some(token) = token {
            headers.insert("Circle-Token", token.parse().unwrap());
        }

        let ua = format!(
            "circlesync/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = match api_url {
            Some(url) => url,
            None => CIRCLE_API_BASE_URL.to_string(),
        };

        Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers.clone())
                .build()
                .unwrap(),
            base_url,
            headers,
            ua,
        }
    }

    pub async fn handle_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>, CircleError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = match response.status() {
            StatusCode::CREATED | StatusCode::NO_CONTENT => return Ok(None),
            status => {
                if !status.is_success() {
                    return self.handle_error(response, status).await;
                }

                response
            }
        };

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(CircleError::from)
    }

    async fn handle_error<T>(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> Result<Option<T>, CircleError> {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(err) => {
                log::debug!("Error deserialize message: {err:#?}");

                format!("HTTP {status}")
            }
        };

        Err(CircleError::Api { status, message })
    }

    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
    ) -> Result<Option<T>, CircleError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.request(
            method.parse().unwrap(),
            format!("{}{}", self.base_url, path),
        );

        log::debug!("request: {method} {path}");

        if let Some((body, content_type)) = data {
            request = request.header("content-type", content_type);
            request = request.body(body);
        }

        let request = request.build()?;

        let response = self.client.execute(request).await?;

        self.handle_response(response).await
    }
}
