//! Thin layer over the time tracking REST API. [ApiClient] is the seam the rest of the crate
//! talks to, [HttpApiClient] is the real implementation.

pub mod entities;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue},
    StatusCode,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::config::Config;

const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("auth-token");
const APP_TOKEN_HEADER: HeaderName = HeaderName::from_static("app-token");

/// Parameters of a request as name/value pairs.
pub type Params = Vec<(String, String)>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Token can't be used as a header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request to {url} was rejected: {body}")]
    BadRequest { url: Url, body: Value },
    #[error("Request to {url} failed with status {status}")]
    Status { url: Url, status: StatusCode },
}

/// Anything able to answer GET requests of the API.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiClient {
    /// Requests `endpoint`, resolved relative to the api url, and returns the decoded json body.
    async fn get(&self, endpoint: &str, params: Params) -> Result<Value, ApiError>;
}

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_builder(config, reqwest::Client::builder())
    }

    /// Same as [HttpApiClient::new], but the transport can be tuned beforehand.
    pub fn with_builder(
        config: &Config,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_str(&config.auth_token)?);
        headers.insert(APP_TOKEN_HEADER, HeaderValue::from_str(&config.app_token)?);

        let client = builder.default_headers(headers).build()?;
        Ok(Self { client, base_url })
    }

    /// Joins like a browser would resolve a relative link. For `https://host/v1/` and
    /// `organizations` that is `https://host/v1/organizations`, but without the trailing slash
    /// the last segment of the base is replaced.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(endpoint)?)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, endpoint: &str, params: Params) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoint)?;

        // The API reads filters from a form encoded body even on GET.
        let mut request = self.client.get(url.clone());
        if !params.is_empty() {
            request = request.form(&params);
        }
        let response = request.send().await?;

        let status = response.status();
        info!("GET {url} {}", status.as_u16());

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await?;
            let body = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
            error!("{body}");
            return Err(ApiError::BadRequest { url, body });
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(ApiError::Status { url, status });
        }

        Ok(response.json::<Value>().await?)
    }
}
