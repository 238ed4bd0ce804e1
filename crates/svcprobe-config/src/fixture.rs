use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// Scratch file written before the upload probes and sent as the file part
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Where the scratch file is written; its file name becomes the upload filename
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// UTF-8 text written to the scratch file
    #[serde(default = "default_content")]
    pub content: String,
    /// Multipart field name of the file part
    #[serde(default = "default_field_name")]
    pub field_name: String,
    /// Declared content type of the file part
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Auxiliary form fields sent next to the file, in order
    #[serde(default = "default_fields")]
    pub fields: IndexMap<String, String>,
}

impl FixtureConfig {
    /// File name used in the multipart `filename` parameter
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            content: default_content(),
            field_name: default_field_name(),
            content_type: default_content_type(),
            fields: default_fields(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("test_document.txt")
}

fn default_content() -> String {
    "这是一个测试文件内容".to_string()
}

fn default_field_name() -> String {
    "file".to_string()
}

fn default_content_type() -> String {
    "text/plain".to_string()
}

fn default_fields() -> IndexMap<String, String> {
    IndexMap::from([
        ("type".to_string(), "document".to_string()),
        ("description".to_string(), "测试文档".to_string()),
    ])
}
