use serde::Deserialize;
use url::Url;

/// Image generation probe against the LLM service
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    #[serde(default = "default_url")]
    pub url: Url,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Requested image size (e.g. "512x512")
    #[serde(default = "default_size")]
    pub size: String,
    /// Number of images
    #[serde(default = "default_count")]
    pub n: u32,
    /// "url" or "b64_json"
    #[serde(default = "default_response_format")]
    pub response_format: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ImageGenConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_id: default_user_id(),
            prompt: default_prompt(),
            size: default_size(),
            n: default_count(),
            response_format: default_response_format(),
            model: default_model(),
        }
    }
}

fn default_url() -> Url {
    crate::default_url("http://localhost:8084/api/llm/images/generate")
}

fn default_user_id() -> String {
    "test-user".to_string()
}

fn default_prompt() -> String {
    "测试图像生成".to_string()
}

fn default_size() -> String {
    "512x512".to_string()
}

const fn default_count() -> u32 {
    1
}

fn default_response_format() -> String {
    "url".to_string()
}

fn default_model() -> String {
    "Qwen/Qwen-Image".to_string()
}
