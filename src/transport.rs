//! The HTTP seam of the client.
//!
//! The client only needs "GET this URL, give me status and body". Keeping that
//! behind [`HttpTransport`] lets callers bring their own HTTP stack (or a
//! recording fake in tests) while the default build uses `reqwest`.

use async_trait::async_trait;

use crate::error::Result;

/// Status line and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    /// A `200 OK` carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests on behalf of [`ScanClient`](crate::ScanClient).
///
/// Implementations must not retry; failures are reported to the caller as-is.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

#[cfg(feature = "client")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "client")]
mod reqwest_transport {
    use async_trait::async_trait;
    use reqwest::Client;

    use super::{HttpTransport, TransportResponse};
    use crate::error::Result;

    /// [`HttpTransport`] backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reuse a preconfigured client (timeouts, proxies, connection pool).
        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait]
    impl HttpTransport for ReqwestTransport {
        async fn get(&self, url: &str) -> Result<TransportResponse> {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok(TransportResponse {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_2xx_only() {
        assert!(TransportResponse::ok("{}").is_success());
        let not_found = TransportResponse {
            status: 404,
            status_text: "Not Found".into(),
            body: String::new(),
        };
        assert!(!not_found.is_success());
    }
}
