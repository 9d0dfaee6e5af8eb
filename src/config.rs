//! Contact form configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONTACT_EMAIL: &str = "contact@shoeimportpro.com";

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors above before submitting.";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We will get back to you within 24 hours.";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL '{0}'")]
    BaseUrl(String),
}

/// Element ids, timings and contact details for one contact form.
///
/// Every key is optional; missing keys take the defaults of the standard
/// landing-page markup.
///
/// # Example
///
/// ```rust
/// use formstate::ContactConfig;
///
/// let config = ContactConfig::from_json(r#"{ "reset_delay_ms": 5000 }"#).unwrap();
/// assert_eq!(config.form_id, "contact-form");
/// assert_eq!(config.reset_delay().as_millis(), 5000);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub form_id: String,
    pub submit_button_id: String,
    pub message_id: String,
    /// Overrides the form's `action` attribute.
    pub endpoint: Option<String>,
    /// Base for resolving a relative `action`.
    pub base_url: Option<String>,
    pub error_recovery_ms: u64,
    pub reset_delay_ms: u64,
    pub contact_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            submit_button_id: "submit-btn".to_string(),
            message_id: "form-message".to_string(),
            endpoint: None,
            base_url: None,
            error_recovery_ms: 2000,
            reset_delay_ms: 3000,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

impl ContactConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if let Some(base) = &config.base_url {
            reqwest::Url::parse(base).map_err(|_| ConfigError::BaseUrl(base.clone()))?;
        }
        Ok(config)
    }

    pub fn error_recovery_delay(&self) -> Duration {
        Duration::from_millis(self.error_recovery_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn failure_message(&self) -> String {
        format!(
            "Sorry, something went wrong. Please try again or contact us directly at {}",
            self.contact_email
        )
    }

    /// Absolute endpoint for a form whose `action` attribute is `action`.
    ///
    /// The configured endpoint wins; otherwise an absolute action is used
    /// as is and a relative one is joined onto `base_url`.
    pub fn resolve_endpoint(&self, action: Option<&str>) -> Option<String> {
        if let Some(endpoint) = &self.endpoint {
            return Some(endpoint.clone());
        }
        let action = action.filter(|a| !a.is_empty())?;
        if reqwest::Url::parse(action).is_ok() {
            return Some(action.to_string());
        }
        let base = reqwest::Url::parse(self.base_url.as_deref()?).ok()?;
        base.join(action).ok().map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_markup() {
        let config = ContactConfig::default();
        assert_eq!(config.submit_button_id, "submit-btn");
        assert_eq!(config.message_id, "form-message");
        assert_eq!(config.error_recovery_delay(), Duration::from_millis(2000));
        assert_eq!(config.reset_delay(), Duration::from_millis(3000));
        assert!(config
            .failure_message()
            .contains("contact@shoeimportpro.com"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ContactConfig::from_json(r#"{"contact_email": "hi@example.com"}"#).unwrap();
        assert_eq!(config.form_id, "contact-form");
        assert!(config.failure_message().ends_with("hi@example.com"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            ContactConfig::from_json(r#"{"colour": "red"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(matches!(
            ContactConfig::from_json(r#"{"base_url": "not a url"}"#),
            Err(ConfigError::BaseUrl(_))
        ));
    }

    #[test]
    fn endpoint_resolution() {
        let mut config = ContactConfig::default();
        assert_eq!(
            config.resolve_endpoint(Some("https://forms.example.com/f/abc")),
            Some("https://forms.example.com/f/abc".to_string())
        );
        assert_eq!(config.resolve_endpoint(Some("/contact")), None);
        assert_eq!(config.resolve_endpoint(None), None);

        config.base_url = Some("https://shoeimportpro.com/".to_string());
        assert_eq!(
            config.resolve_endpoint(Some("/contact")),
            Some("https://shoeimportpro.com/contact".to_string())
        );

        config.endpoint = Some("https://override.example.com/".to_string());
        assert_eq!(
            config.resolve_endpoint(Some("/contact")),
            Some("https://override.example.com/".to_string())
        );
    }
}
