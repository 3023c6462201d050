//! HTTP poll source backed by reqwest

use crate::client::PollSource;
use crate::config::ResolvedApiConfig;
use crate::error::{FetchError, Result};
use crate::poll::{Poll, PollId};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

/// Poll service client
#[derive(Debug, Clone)]
pub struct HttpPollClient {
    client: Client,
    config: ResolvedApiConfig,
}

impl HttpPollClient {
    /// Create a new client from a resolved configuration
    pub fn new(config: ResolvedApiConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| format!("Invalid header name '{}': {}", key, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| format!("Invalid header value for '{}': {}", key, e))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the configuration this client was built from
    pub fn config(&self) -> &ResolvedApiConfig {
        &self.config
    }
}

#[async_trait]
impl PollSource for HttpPollClient {
    async fn fetch_poll(&self, poll_id: &PollId) -> std::result::Result<Option<Poll>, FetchError> {
        let url = self.config.poll_endpoint(poll_id);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                poll_id: poll_id.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            debug!("Poll {} answered with status {}", poll_id, status);
            return Err(FetchError::Status {
                poll_id: poll_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            poll_id: poll_id.to_string(),
            message: format!("Failed to read response body: {}", e),
        })?;

        serde_json::from_str::<Option<Poll>>(&body).map_err(|e| {
            warn!("Poll {} payload could not be decoded: {}", poll_id, e);
            FetchError::Decode {
                poll_id: poll_id.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn source_name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpPollClient {
        HttpPollClient::new(ResolvedApiConfig::new(server.uri()).with_timeout_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_poll_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/polls/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "T",
                "description": "D",
                "questions": [
                    {"id": 1, "text": "Q", "choices": [{"id": 1, "choice_text": "A"}]}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let poll = client_for(&server)
            .fetch_poll(&PollId::new("1").unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(poll.title, "T");
        assert_eq!(poll.questions()[0].choices()[0].label().display(), "A");
    }

    #[tokio::test]
    async fn test_fetch_poll_null_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/polls/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let poll = client_for(&server)
            .fetch_poll(&PollId::new("2").unwrap())
            .await
            .unwrap();
        assert!(poll.is_none());
    }

    #[tokio::test]
    async fn test_fetch_poll_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/polls/3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_poll(&PollId::new("3").unwrap())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                poll_id: "3".to_string(),
                status: 404
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_poll_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/polls/4"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_poll(&PollId::new("4").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_poll_transport_failure() {
        // Nothing listens on the discard port
        let client =
            HttpPollClient::new(ResolvedApiConfig::new("http://127.0.0.1:9").with_timeout_secs(2))
                .unwrap();

        let err = client
            .fetch_poll(&PollId::new("5").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { ref poll_id, .. } if poll_id == "5"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(HttpPollClient::new(ResolvedApiConfig::new("localhost")).is_err());

        let config = ResolvedApiConfig::default().with_header("bad header".into(), "x".into());
        assert!(HttpPollClient::new(config).is_err());
    }
}
