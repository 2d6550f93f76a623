//! Configuration for the IntelGraph client.

use std::env;
use std::time::Duration;

use crate::error::IntelGraphError;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.intelgraph.idefense.com/rest/";

/// Default web viewer URL for intelligence alerts; the alert UUID is appended.
pub const DEFAULT_VIEWER_URL: &str =
    "https://intelgraph.idefense.com/#/node/intelligence_alert/view/";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "IDEF_TOKEN";

/// Configuration for connecting to IntelGraph.
#[derive(Clone)]
pub struct IntelGraphConfig {
    /// Base URL of the REST API, always ending in `/`.
    pub api_url: String,
    /// Token sent in the `auth-token` header.
    pub api_token: String,
    /// Viewer URL prefix used when linking intelligence alerts.
    pub viewer_url: String,
    /// Optional per-request timeout. None means the transport decides.
    pub request_timeout: Option<Duration>,
}

impl Default for IntelGraphConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            viewer_url: DEFAULT_VIEWER_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl IntelGraphConfig {
    /// Create a configuration for the default endpoint with the given token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `IDEF_TOKEN` - API token
    ///
    /// Optional environment variables:
    /// - `IDEF_API_URL` - REST API base URL (default: https://api.intelgraph.idefense.com/rest/)
    /// - `IDEF_VIEWER_URL` - Alert viewer URL prefix
    /// - `IDEF_TIMEOUT_SECS` - Request timeout in seconds (default: none)
    pub fn from_env() -> Result<Self, IntelGraphError> {
        let api_token = env::var(TOKEN_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                IntelGraphError::Config(format!(
                    "Please provide API key in environment variable {}",
                    TOKEN_ENV
                ))
            })?;

        let api_url = env::var("IDEF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let viewer_url =
            env::var("IDEF_VIEWER_URL").unwrap_or_else(|_| DEFAULT_VIEWER_URL.to_string());

        let request_timeout = env::var("IDEF_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);

        Ok(Self {
            api_url: with_trailing_slash(api_url),
            api_token,
            viewer_url,
            request_timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> IntelGraphConfigBuilder {
        IntelGraphConfigBuilder::default()
    }
}

impl std::fmt::Debug for IntelGraphConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntelGraphConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &"<redacted>")
            .field("viewer_url", &self.viewer_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Builder for IntelGraphConfig.
#[derive(Debug, Default)]
pub struct IntelGraphConfigBuilder {
    config: IntelGraphConfig,
}

impl IntelGraphConfigBuilder {
    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = with_trailing_slash(url.into());
        self
    }

    /// Set the API token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = token.into();
        self
    }

    /// Set the alert viewer URL prefix.
    pub fn viewer_url(mut self, url: impl Into<String>) -> Self {
        self.config.viewer_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> IntelGraphConfig {
        self.config
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
