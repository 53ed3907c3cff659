//! Value checks applied while building configuration

use super::error::ValidationError;
use url::Url;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// A base URL must be absolute http(s)
    pub fn validate_base_url(field_path: &str, value: &str) -> Result<(), ValidationError> {
        let url = Url::parse(value)
            .map_err(|e| ValidationError::invalid_url(field_path, format!("{}: {}", value, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ValidationError::invalid_url(
                field_path,
                format!("unsupported scheme '{}'", scheme),
            )),
        }
    }

    pub fn validate_positive(field_path: &str, value: u64) -> Result<(), ValidationError> {
        if value == 0 {
            return Err(ValidationError::out_of_range(
                field_path,
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
