use serde::Deserialize;
use url::Url;

/// Upload through the gateway, then straight to the file service for comparison
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Gateway upload route
    #[serde(default = "default_url")]
    pub url: Url,
    /// File service upload route, bypassing the gateway
    #[serde(default = "default_direct_url")]
    pub direct_url: Url,
    /// Value of the `X-User-Id` header
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Value of the `User-Agent` header on the gateway request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            direct_url: default_direct_url(),
            user_id: default_user_id(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_url() -> Url {
    crate::default_url("http://localhost:8080/api/files/upload")
}

fn default_direct_url() -> Url {
    crate::default_url("http://localhost:8086/file/api/files/upload")
}

fn default_user_id() -> String {
    "anonymous".to_string()
}

fn default_user_agent() -> String {
    "Test-Client".to_string()
}
