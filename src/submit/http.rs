//! reqwest-backed transport.

use crate::submit::transport::{FormPayload, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Posts payloads as multipart/form-data.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn multipart(payload: &FormPayload) -> Form {
    payload
        .entries()
        .iter()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> Result<TransportResponse, TransportError> {
        let url = reqwest::Url::parse(endpoint)
            .map_err(|_| TransportError::InvalidEndpoint(endpoint.to_string()))?;

        let response = self
            .client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(multipart(payload))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(TransportResponse {
            status: response.status().as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::SubmissionOutcome;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> FormPayload {
        let fields = [
            crate::validation::Field::new("name", "name", "Grace Hopper"),
            crate::validation::Field::new("email", "email", "grace@example.com"),
        ];
        FormPayload::from_fields(&fields)
    }

    #[tokio::test]
    async fn posts_multipart_fields_accepting_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let endpoint = format!("{}/contact", server.uri());
        let response = transport.post_form(&endpoint, &payload()).await.unwrap();
        assert!(response.is_success());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let content_type = requests[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data"), "{content_type}");

        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains(r#"name="name""#), "{body}");
        assert!(body.contains("Grace Hopper"));
        assert!(body.contains(r#"name="email""#));
        assert!(body.contains("grace@example.com"));
    }

    #[tokio::test]
    async fn server_error_is_a_failed_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let transport = HttpTransport::new().unwrap();
        let endpoint = format!("{}/contact", server.uri());
        let result = transport.post_form(&endpoint, &payload()).await;

        assert_eq!(result, Ok(TransportResponse { status: 500 }));
        assert!(matches!(
            SubmissionOutcome::from(result),
            SubmissionOutcome::Failure(_)
        ));
    }

    #[tokio::test]
    async fn relative_endpoint_is_rejected_before_sending() {
        let transport = HttpTransport::new().unwrap();
        let result = transport
            .post_form("/contact", &FormPayload::default())
            .await;

        assert_eq!(
            result,
            Err(TransportError::InvalidEndpoint("/contact".to_string()))
        );
    }
}
