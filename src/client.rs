//! The preference notification sent when a language link is clicked.

use crate::error::ClientError;
use futures::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Body and token of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRequest {
    pub language: String,
    pub csrf_token: Option<String>,
}

impl PreferenceRequest {
    pub fn new(language: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            language: language.into(),
            csrf_token,
        }
    }

    /// `language=<code>`, with the code sent verbatim.
    pub fn form_body(&self) -> String {
        format!("language={}", self.language)
    }
}

/// Sends a preference notification to an endpoint.
///
/// Implementations resolve once a response (of any status) arrives and fail
/// only when no response could be obtained.
pub trait PreferenceClient: Send + Sync {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a PreferenceRequest,
    ) -> BoxFuture<'a, Result<(), ClientError>>;
}

/// `reqwest`-backed client.
///
/// Relative endpoints (e.g. `/i18n/setlang/`) are resolved against the base
/// URL, the way a page resolves them against its own location.
#[derive(Debug, Clone)]
pub struct HttpPreferenceClient {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl HttpPreferenceClient {
    pub fn new(timeout: Duration, base_url: Option<Url>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, base_url })
    }

    fn resolve(&self, endpoint: &str) -> Result<Url, ClientError> {
        let resolved = match &self.base_url {
            Some(base) => base.join(endpoint),
            None => Url::parse(endpoint),
        };

        resolved.map_err(|e| ClientError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

impl PreferenceClient for HttpPreferenceClient {
    fn submit<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a PreferenceRequest,
    ) -> BoxFuture<'a, Result<(), ClientError>> {
        Box::pin(async move {
            let url = self.resolve(endpoint)?;

            let mut builder = self
                .client
                .post(url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.form_body());

            if let Some(token) = &request.csrf_token {
                builder = builder.header(CSRF_HEADER, token);
            }

            let response = builder
                .send()
                .await
                .map_err(|source| ClientError::Transport {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

            // The status is not inspected; the endpoint tends to fail silently anyway
            debug!(status = %response.status(), "Preference request completed");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_string, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    /// Base URL of a local port that nothing listens on
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    fn test_client(base: &str) -> HttpPreferenceClient {
        let base_url = Url::parse(base).expect("valid base url");
        HttpPreferenceClient::new(Duration::from_secs(5), Some(base_url)).expect("client builds")
    }

    #[test]
    fn test_form_body() {
        let request = PreferenceRequest::new("fr", None);
        assert_eq!(request.form_body(), "language=fr");
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        let client = test_client("https://example.com/some/page");
        let url = client.resolve("/i18n/setlang/").expect("resolves");
        assert_eq!(url.as_str(), "https://example.com/i18n/setlang/");
    }

    #[test]
    fn test_resolve_relative_without_base_fails() {
        let client = HttpPreferenceClient::new(Duration::from_secs(5), None).expect("client builds");
        let result = client.resolve("/i18n/setlang/");
        assert!(matches!(result, Err(ClientError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn test_submit_posts_form_with_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/i18n/setlang/"))
            .and(header("Content-Type", FORM_CONTENT_TYPE))
            .and(header(CSRF_HEADER, "tok123"))
            .and(body_string("language=fr"))
            .respond_with(ResponseTemplate::new(302))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let request = PreferenceRequest::new("fr", Some("tok123".to_string()));

        client
            .submit("/i18n/setlang/", &request)
            .await
            .expect("request completes");
    }

    #[tokio::test]
    async fn test_submit_without_token_omits_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/i18n/setlang/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let request = PreferenceRequest::new("en", None);

        client
            .submit("/i18n/setlang/", &request)
            .await
            .expect("request completes");

        let received = mock_server.received_requests().await.expect("recording enabled");
        assert_eq!(received.len(), 1);
        assert!(received[0].headers.get("x-csrftoken").is_none());
        assert_eq!(received[0].body, b"language=en");
    }

    #[tokio::test]
    async fn test_submit_error_status_is_not_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("CSRF verification failed"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let request = PreferenceRequest::new("fr", None);

        assert!(client.submit("/i18n/setlang/", &request).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_connection_refused() {
        let client = test_client(&closed_port_url());
        let request = PreferenceRequest::new("fr", None);
        let result = client.submit("/i18n/setlang/", &request).await;

        assert!(matches!(result, Err(ClientError::Transport { .. })));
    }
}
