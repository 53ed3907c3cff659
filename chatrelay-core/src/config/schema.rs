//! Configuration values handed to each adapter

use super::env::{self, EnvSource};
use super::error::ConfigResult;
use super::secrets::{SafeLogging, SecretString};
use std::time::Duration;

/// Settings for the DeepSeek chat-completions adapter
#[derive(Debug, Clone, PartialEq)]
pub struct DeepSeekConfig {
    /// Missing keys are reported per request, not at startup
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl DeepSeekConfig {
    pub const API_KEY_VAR: &'static str = "DEEPSEEK_API_KEY";
    pub const BASE_URL_VAR: &'static str = "DEEPSEEK_BASE_URL";
    pub const MODEL_VAR: &'static str = "DEEPSEEK_MODEL";
    pub const MAX_TOKENS_VAR: &'static str = "DEEPSEEK_MAX_TOKENS";
    pub const TIMEOUT_VAR: &'static str = "DEEPSEEK_TIMEOUT_MS";

    pub const DEFAULT_BASE_URL: &'static str = "https://api.deepseek.com";
    pub const DEFAULT_MODEL: &'static str = "deepseek-chat";
    pub const DEFAULT_MAX_TOKENS: u32 = 2200;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(45_000);

    /// Read the `DEEPSEEK_*` settings from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&env::ProcessEnv)
    }

    /// Read the `DEEPSEEK_*` settings from any source
    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        Ok(Self {
            api_key: env::secret(source, Self::API_KEY_VAR),
            base_url: env::base_url(source, Self::BASE_URL_VAR, Self::DEFAULT_BASE_URL)?,
            model: env::string(source, Self::MODEL_VAR)
                .unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            max_tokens: env::positive_u32(source, Self::MAX_TOKENS_VAR, Self::DEFAULT_MAX_TOKENS)?,
            timeout: env::millis(source, Self::TIMEOUT_VAR, Self::DEFAULT_TIMEOUT)?,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

impl SafeLogging for DeepSeekConfig {
    fn safe_for_logging(&self) -> String {
        format!(
            "deepseek(base_url={}, model={}, max_tokens={}, timeout_ms={}, api_key={})",
            self.base_url,
            self.model,
            self.max_tokens,
            self.timeout.as_millis(),
            self.api_key.safe_for_logging()
        )
    }
}

/// Settings for the OpenAI responses adapter
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAIConfig {
    /// Missing keys are reported per request, not at startup
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub const API_KEY_VAR: &'static str = "OPENAI_API_KEY";
    pub const BASE_URL_VAR: &'static str = "OPENAI_BASE_URL";
    pub const MODEL_VAR: &'static str = "OPENAI_MODEL";
    pub const MAX_OUTPUT_TOKENS_VAR: &'static str = "OPENAI_MAX_OUTPUT_TOKENS";
    pub const TIMEOUT_VAR: &'static str = "OPENAI_TIMEOUT_MS";

    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2200;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(45_000);

    /// Read the `OPENAI_*` settings from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&env::ProcessEnv)
    }

    /// Read the `OPENAI_*` settings from any source
    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        Ok(Self {
            api_key: env::secret(source, Self::API_KEY_VAR),
            base_url: env::base_url(source, Self::BASE_URL_VAR, Self::DEFAULT_BASE_URL)?,
            model: env::string(source, Self::MODEL_VAR)
                .unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            max_output_tokens: env::positive_u32(
                source,
                Self::MAX_OUTPUT_TOKENS_VAR,
                Self::DEFAULT_MAX_OUTPUT_TOKENS,
            )?,
            timeout: env::millis(source, Self::TIMEOUT_VAR, Self::DEFAULT_TIMEOUT)?,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

impl SafeLogging for OpenAIConfig {
    fn safe_for_logging(&self) -> String {
        format!(
            "openai(base_url={}, model={}, max_output_tokens={}, timeout_ms={}, api_key={})",
            self.base_url,
            self.model,
            self.max_output_tokens,
            self.timeout.as_millis(),
            self.api_key.safe_for_logging()
        )
    }
}

/// Everything the adapters need, built once at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelayConfig {
    pub deepseek: DeepSeekConfig,
    pub openai: OpenAIConfig,
}

impl RelayConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&env::ProcessEnv)
    }

    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        Ok(Self {
            deepseek: DeepSeekConfig::from_source(source)?,
            openai: OpenAIConfig::from_source(source)?,
        })
    }
}
