use std::net::SocketAddr;

use url::Url;

/// Default listen port when `MCP_BIND_ADDR` is unset.
const DEFAULT_PORT: u16 = 8080;

const DEFAULT_SITE_NAME: &str = "markdown sync framework";
const DEFAULT_SITE_URL: &str = "https://www.waynesutton.ai";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CONTENT_API_URL (or CONVEX_URL) environment variable is not set")]
    MissingBackendUrl,
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidBackendUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("MCP_BIND_ADDR must be a socket address such as 0.0.0.0:8080")]
    InvalidBindAddr,
}

/// Gateway configuration, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the content API.
    pub backend_url: Url,
    /// Shared secret for bearer auth. `None` disables the check.
    pub api_key: Option<String>,
    pub site_name: String,
    pub site_url: String,
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    /// Load configuration from environment.
    ///
    /// - `CONTENT_API_URL` — backend base URL; falls back to `CONVEX_URL` /
    ///   `VITE_CONVEX_URL` with `.cloud` rewritten to `.site`
    /// - `MCP_API_KEY` (optional) — bearer secret; empty means disabled
    /// - `MCP_SITE_NAME`, `MCP_SITE_URL` (optional) — site identity in results
    /// - `MCP_BIND_ADDR` (optional, default 0.0.0.0:8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match non_empty_var("CONTENT_API_URL") {
            Some(url) => url,
            None => non_empty_var("CONVEX_URL")
                .or_else(|| non_empty_var("VITE_CONVEX_URL"))
                .map(|url| convex_site_url(&url))
                .ok_or(ConfigError::MissingBackendUrl)?,
        };

        let mut config = Self::new(&backend)?;
        config.api_key = non_empty_var("MCP_API_KEY");
        if let Some(addr) = non_empty_var("MCP_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|_| ConfigError::InvalidBindAddr)?;
        }
        if let Some(name) = non_empty_var("MCP_SITE_NAME") {
            config.site_name = name;
        }
        if let Some(url) = non_empty_var("MCP_SITE_URL") {
            config.site_url = url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    /// Configuration pointing at `backend_url` with every other field defaulted.
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        let trimmed = backend_url.trim_end_matches('/');
        let backend_url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBackendUrl {
            url: backend_url.to_string(),
            source,
        })?;

        Ok(Self {
            backend_url,
            api_key: None,
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        })
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Convex deployment URLs (`*.convex.cloud`) serve HTTP actions from the
/// matching `*.convex.site` host.
pub fn convex_site_url(deployment_url: &str) -> String {
    deployment_url.replace(".cloud", ".site")
}
