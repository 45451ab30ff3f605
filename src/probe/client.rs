// ABOUTME: HTTP client seam used by the service probe.
// ABOUTME: Only the status code matters; response bodies are never read.

use super::error::TransportError;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Issues a single GET and reports the response status.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get_status(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<u16, TransportError>;
}

/// reqwest-backed client supporting plain HTTP and rustls HTTPS.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(concat!("stackpilot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_status(
        &self,
        url: &str,
        timeout: Duration,
    ) -> std::result::Result<u16, TransportError> {
        let response = self
            .inner
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(timeout)
                } else if e.is_connect() {
                    TransportError::Connect(error_chain(&e))
                } else {
                    TransportError::Request(error_chain(&e))
                }
            })?;

        Ok(response.status().as_u16())
    }
}

/// Render an error with every source, outermost first.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = ReqwestClient::new().unwrap();
        let result = client
            .get_status(&format!("http://127.0.0.1:{port}/health"), Duration::from_secs(2))
            .await;

        match result {
            Err(TransportError::Connect(message)) => {
                assert!(
                    message.to_lowercase().contains("refused"),
                    "root cause missing from: {message}"
                );
            }
            other => panic!("expected a connect error, got {other:?}"),
        }
    }

    #[test]
    fn error_chain_includes_nested_sources() {
        #[derive(Debug)]
        struct Outer(std::io::Error);

        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("error sending request")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[tokio::test]
    async fn malformed_url_is_a_request_error() {
        let client = ReqwestClient::new().unwrap();
        let result = client.get_status("not a url", Duration::from_secs(1)).await;

        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
