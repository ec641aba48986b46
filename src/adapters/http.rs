use crate::config::ClientConfig;
use crate::core::{ContactClient, ContactRequest};
use crate::utils::error::{ContactError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpContactClient {
    client: Client,
    endpoint: String,
}

impl HttpContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// 不設 timeout 時沿用 reqwest 的預設（不逾時）
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(config.endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn parse_json(bytes: &[u8]) -> Result<serde_json::Value> {
    serde_json::from_slice(bytes).map_err(|e| ContactError::InvalidBody(e.to_string()))
}

#[async_trait]
impl ContactClient for HttpContactClient {
    async fn send(&self, request: &ContactRequest) -> Result<serde_json::Value> {
        tracing::debug!("Posting contact request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Contact API response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            let error_body = parse_json(&body)?;
            let detail = error_body
                .get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string);

            return Err(ContactError::ServerRejection {
                status: status.as_u16(),
                detail,
            });
        }

        parse_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn sample_request() -> ContactRequest {
        ContactRequest {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            phone: "11 99999-0000".to_string(),
            company: "".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/contact")
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "nome": "Maria",
                    "email": "maria@example.com",
                    "telefone": "11 99999-0000",
                    "empresa": ""
                }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": 1}));
        });

        let client = HttpContactClient::new(server.url("/api/contact"));
        let body = client.send(&sample_request()).await.unwrap();

        api_mock.assert();
        assert_eq!(body, serde_json::json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_send_server_rejection_with_detail() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Invalid email"}));
        });

        let client = HttpContactClient::new(server.url("/api/contact"));
        let err = client.send(&sample_request()).await.unwrap_err();

        api_mock.assert();
        match err {
            ContactError::ServerRejection { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Invalid email"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_server_rejection_without_string_detail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(422)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": [{"loc": ["body", "nome"]}]}));
        });

        let client = HttpContactClient::new(server.url("/api/contact"));
        let err = client.send(&sample_request()).await.unwrap_err();

        assert!(matches!(
            err,
            ContactError::ServerRejection {
                status: 422,
                detail: None
            }
        ));
        assert_eq!(err.message("fallback"), "fallback");
    }

    #[tokio::test]
    async fn test_send_error_body_not_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500).body("Internal Server Error");
        });

        let client = HttpContactClient::new(server.url("/api/contact"));
        let err = client.send(&sample_request()).await.unwrap_err();

        assert!(matches!(err, ContactError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_send_success_body_not_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200).body("ok");
        });

        let client = HttpContactClient::new(server.url("/api/contact"));
        let err = client.send(&sample_request()).await.unwrap_err();

        assert!(matches!(err, ContactError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_send_transport_failure() {
        // 先綁定再釋放，取得一個沒有服務在監聽的埠
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = HttpContactClient::new(format!("http://{}/api/contact", addr));
        let err = client.send(&sample_request()).await.unwrap_err();

        assert!(matches!(err, ContactError::Transport(_)));
        assert!(err.is_submission_failure());
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = ClientConfig::default();
        let client = HttpContactClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/contact");
    }
}
