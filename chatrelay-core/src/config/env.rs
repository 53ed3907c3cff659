//! Reading settings from environment-style key/value sources

use super::error::{ConfigResult, ValidationError};
use super::secrets::SecretString;
use super::validator::ConfigValidator;
use std::time::Duration;

/// A source of settings. `std::env` in production, a map in tests.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Trimmed value; blank counts as unset
pub(crate) fn string(source: &dyn EnvSource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn secret(source: &dyn EnvSource, key: &str) -> Option<SecretString> {
    string(source, key).map(SecretString::new)
}

/// Base URL with its trailing slash removed
pub(crate) fn base_url(source: &dyn EnvSource, key: &str, default: &str) -> ConfigResult<String> {
    let value = string(source, key).unwrap_or_else(|| default.to_string());
    let value = value.strip_suffix('/').unwrap_or(&value).to_string();
    ConfigValidator::validate_base_url(key, &value)?;
    Ok(value)
}

/// Positive integer, defaulted when unset
pub(crate) fn positive_u32(source: &dyn EnvSource, key: &str, default: u32) -> ConfigResult<u32> {
    let Some(raw) = string(source, key) else {
        return Ok(default);
    };

    let value: u32 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_value(key, "a positive integer", raw.clone()))?;
    ConfigValidator::validate_positive(key, u64::from(value))?;
    Ok(value)
}

/// Duration given in milliseconds, defaulted when unset
pub(crate) fn millis(source: &dyn EnvSource, key: &str, default: Duration) -> ConfigResult<Duration> {
    let Some(raw) = string(source, key) else {
        return Ok(default);
    };

    let value: u64 = raw
        .parse()
        .map_err(|_| ValidationError::invalid_value(key, "milliseconds", raw.clone()))?;
    ConfigValidator::validate_positive(key, value)?;
    Ok(Duration::from_millis(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_blank_values_are_unset() {
        let env = source(&[("KEY", "   ")]);
        assert!(string(&env, "KEY").is_none());
        assert!(secret(&env, "KEY").is_none());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let env = source(&[("URL", "https://proxy.example.com/v1/")]);
        assert_eq!(
            base_url(&env, "URL", "https://unused.example.com").unwrap(),
            "https://proxy.example.com/v1"
        );
        assert_eq!(
            base_url(&env, "OTHER", "https://api.deepseek.com").unwrap(),
            "https://api.deepseek.com"
        );
    }

    #[test]
    fn test_numbers_default_and_validate() {
        let env = source(&[("TOKENS", "512"), ("BAD", "lots"), ("ZERO", "0")]);
        assert_eq!(positive_u32(&env, "TOKENS", 2200).unwrap(), 512);
        assert_eq!(positive_u32(&env, "UNSET", 2200).unwrap(), 2200);

        match positive_u32(&env, "BAD", 1) {
            Err(ConfigError::ValidationError(e)) => assert_eq!(e.field_path, "BAD"),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(millis(&env, "ZERO", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_process_env_source() {
        std::env::set_var("CHATRELAY_ENV_SOURCE_TEST", "value");
        assert_eq!(
            string(&ProcessEnv, "CHATRELAY_ENV_SOURCE_TEST").as_deref(),
            Some("value")
        );
        std::env::remove_var("CHATRELAY_ENV_SOURCE_TEST");
    }
}
