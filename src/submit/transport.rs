//! Transport seam for form submissions.

use crate::validation::{Field, InputKind};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Ordered name/value pairs sent to the endpoint.
///
/// Built like a browser builds form data: controls without a name and
/// unchecked checkboxes are left out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    entries: Vec<(String, String)>,
}

impl FormPayload {
    pub fn from_fields(fields: &[Field]) -> Self {
        let entries = fields
            .iter()
            .filter(|field| !field.name.is_empty())
            .filter(|field| field.input != InputKind::Checkbox || field.checked)
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Status line of the endpoint's reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Endpoint answered with status {0}")]
    Status(u16),

    #[error("Invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<Result<TransportResponse, TransportError>> for SubmissionOutcome {
    /// Non-2xx statuses and transport errors are the same failure.
    fn from(result: Result<TransportResponse, TransportError>) -> Self {
        match result {
            Ok(response) if response.is_success() => Self::Success,
            Ok(response) => Self::Failure(TransportError::Status(response.status).to_string()),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

/// Sends a form payload to an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` to `endpoint`, asking for a JSON reply.
    async fn post_form(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_skips_unnamed_and_unchecked() {
        let fields = vec![
            Field::new("name", "name", "Ada"),
            Field::new("anon", "", "ignored"),
            Field::new("news", "newsletter", "on").input(InputKind::Checkbox),
            Field::new("terms", "terms", "on")
                .input(InputKind::Checkbox)
                .checked(true),
        ];

        let payload = FormPayload::from_fields(&fields);

        assert_eq!(
            payload.entries(),
            &[
                ("name".to_string(), "Ada".to_string()),
                ("terms".to_string(), "on".to_string()),
            ]
        );
        assert_eq!(payload.get("terms"), Some("on"));
        assert_eq!(payload.get("newsletter"), None);
    }

    #[test]
    fn payload_keeps_untrimmed_values() {
        let payload = FormPayload::from_fields(&[Field::new("m", "message", "  hi  ")]);
        assert_eq!(payload.get("message"), Some("  hi  "));
    }

    #[test]
    fn only_2xx_is_success() {
        assert!(SubmissionOutcome::from(Ok(TransportResponse { status: 200 })).is_success());
        assert!(SubmissionOutcome::from(Ok(TransportResponse { status: 204 })).is_success());
        assert!(!SubmissionOutcome::from(Ok(TransportResponse { status: 302 })).is_success());
        assert_eq!(
            SubmissionOutcome::from(Ok(TransportResponse { status: 500 })),
            SubmissionOutcome::Failure("Endpoint answered with status 500".to_string())
        );
        assert!(!SubmissionOutcome::from(Err(TransportError::Network(
            "connection refused".to_string()
        )))
        .is_success());
    }
}
