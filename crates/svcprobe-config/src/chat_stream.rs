use serde::Deserialize;
use url::Url;

/// Streaming chat probes: GET through the gateway, then POST to the LLM service
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatStreamConfig {
    /// Gateway stream route; the chat parameters are appended as a query string
    #[serde(default = "default_gateway_url")]
    pub gateway_url: Url,
    /// LLM service stream route taking a JSON body
    #[serde(default = "default_direct_url")]
    pub direct_url: Url,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Prompt sent on the gateway request
    #[serde(default = "default_gateway_message")]
    pub gateway_message: String,
    /// Prompt sent on the direct request
    #[serde(default = "default_direct_message")]
    pub direct_message: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ChatStreamConfig {
    fn default() -> Self {
        Self {
            gateway_url: default_gateway_url(),
            direct_url: default_direct_url(),
            user_id: default_user_id(),
            gateway_message: default_gateway_message(),
            direct_message: default_direct_message(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_gateway_url() -> Url {
    crate::default_url("http://localhost:8080/api/llm/chat/stream")
}

fn default_direct_url() -> Url {
    crate::default_url("http://localhost:8084/api/llm/chat/stream")
}

fn default_user_id() -> String {
    "test-user-001".to_string()
}

fn default_gateway_message() -> String {
    "你好，请介绍一下自己".to_string()
}

fn default_direct_message() -> String {
    "hello".to_string()
}

fn default_model() -> String {
    "deepseek-ai/DeepSeek-V3".to_string()
}

const fn default_temperature() -> f64 {
    0.7
}

const fn default_max_tokens() -> u32 {
    2048
}
