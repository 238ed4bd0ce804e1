use std::path::Path;

use url::Url;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents fail
    /// [`Config::parse`]
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");

        Self::parse(&raw)
    }

    /// Expand `{{ env.VAR }}` placeholders, deserialize and validate
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion, TOML parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Check the configuration for values no probe could use
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending field
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_urls()?;
        self.validate_fixture()?;
        self.validate_timeouts()?;
        Ok(())
    }

    fn validate_urls(&self) -> anyhow::Result<()> {
        if self.llm.model_urls.is_empty() {
            anyhow::bail!("llm.model_urls must list at least one URL");
        }

        let mut urls = vec![
            ("gateway.url", &self.gateway.url),
            ("gateway.direct_url", &self.gateway.direct_url),
            ("upload.url", &self.upload.url),
            ("llm.health_url", &self.llm.health_url),
            ("embedding.url", &self.embedding.url),
            ("chat_stream.gateway_url", &self.chat_stream.gateway_url),
            ("chat_stream.direct_url", &self.chat_stream.direct_url),
            ("imagegen.url", &self.imagegen.url),
        ];
        urls.extend(self.llm.model_urls.iter().map(|url| ("llm.model_urls", url)));

        for (field, url) in urls {
            require_http(field, url)?;
        }

        Ok(())
    }

    fn validate_fixture(&self) -> anyhow::Result<()> {
        if self.fixture.file_name().is_none_or(str::is_empty) {
            anyhow::bail!("fixture.path must end in a file name");
        }

        if self.fixture.field_name.is_empty() {
            anyhow::bail!("fixture.field_name must not be empty");
        }

        Ok(())
    }

    fn validate_timeouts(&self) -> anyhow::Result<()> {
        if self.llm.timeout_duration()?.is_zero() {
            anyhow::bail!("llm.timeout must be greater than 0");
        }

        if self.embedding.timeout_duration()?.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("embedding.timeout must be greater than 0");
        }

        Ok(())
    }
}

fn require_http(field: &str, url: &Url) -> anyhow::Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{field} must use http or https, got '{other}://'"),
    }
}
