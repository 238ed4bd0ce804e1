use serde::Deserialize;
use url::Url;

/// Upload-only probe against the file service
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    #[serde(default = "default_url")]
    pub url: Url,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_id: default_user_id(),
        }
    }
}

fn default_url() -> Url {
    crate::default_url("http://localhost:8086/file/api/files/upload")
}

fn default_user_id() -> String {
    "anonymous".to_string()
}
