//! IntelGraph HTTP client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::api::IntelGraphApi;
use crate::config::IntelGraphConfig;
use crate::error::IntelGraphError;
use crate::types::{DocumentKind, QueryField, SearchResponse};

/// Header carrying the API token.
const AUTH_HEADER: &str = "auth-token";

/// Client for the IntelGraph REST API.
#[derive(Clone)]
pub struct IntelGraphClient {
    http: Client,
    config: IntelGraphConfig,
    api_url: Url,
}

impl IntelGraphClient {
    /// Build a client from configuration. No request is made.
    pub fn new(config: IntelGraphConfig) -> Result<Self, IntelGraphError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| IntelGraphError::InvalidUrl(format!("{}: {}", config.api_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut token = HeaderValue::from_str(&config.api_token)
            .map_err(|_| IntelGraphError::Config("API token is not a valid header value".into()))?;
        token.set_sensitive(true);
        headers.insert(AUTH_HEADER, token);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(IntelGraphError::Http)?;

        Ok(Self {
            http,
            config,
            api_url,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &IntelGraphConfig {
        &self.config
    }

    /// URL of a search request.
    pub fn search_url(&self, kind: DocumentKind, field: QueryField, value: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.api_url,
            kind.endpoint(),
            field.param(),
            urlencoding::encode(value)
        )
    }

    /// URL of a server-relative asset, resolved against the API host.
    ///
    /// Paths that would leave the API origin are rejected, since every
    /// request carries the API token.
    pub fn asset_url(&self, path: &str) -> Result<Url, IntelGraphError> {
        let url = self
            .api_url
            .join(path)
            .map_err(|e| IntelGraphError::InvalidUrl(format!("{}: {}", path, e)))?;

        if url.origin() != self.api_url.origin() {
            return Err(IntelGraphError::InvalidUrl(format!(
                "{} is not on {}",
                path,
                self.api_url.origin().ascii_serialization()
            )));
        }

        Ok(url)
    }

    async fn get(&self, url: &str) -> Result<Response, IntelGraphError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(IntelGraphError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntelGraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl IntelGraphApi for IntelGraphClient {
    async fn search(
        &self,
        kind: DocumentKind,
        field: QueryField,
        value: &str,
    ) -> Result<SearchResponse, IntelGraphError> {
        let url = self.search_url(kind, field, value);
        let response = self.get(&url).await?;
        let bytes = response.bytes().await.map_err(IntelGraphError::Http)?;
        let body: SearchResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "{} {}={} matched {}",
            kind.endpoint(),
            field.param(),
            value,
            body.total_size
        );
        Ok(body)
    }

    async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>, IntelGraphError> {
        let url = self.asset_url(path)?;
        let response = self.get(url.as_str()).await?;
        let bytes = response.bytes().await.map_err(IntelGraphError::Http)?;
        Ok(bytes.to_vec())
    }
}

impl std::fmt::Debug for IntelGraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntelGraphClient")
            .field("config", &self.config)
            .finish()
    }
}
