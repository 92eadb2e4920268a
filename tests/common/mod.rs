//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use confluxscan_client::client::Result;
use confluxscan_client::transport::{HttpTransport, TransportResponse};
use confluxscan_client::{ApiConfig, ScanClient};
use serde_json::Value;

pub const CONTRACT: &str = "cfx:achc8nxj7r451c223m18w2dwjnmhkd6rxawrvkvsy2";
pub const ACCOUNT: &str = "cfx:aapgmw9up7tm7dxy5pctg8442dz6x7ak4u9fzsj0fm";

static TRACING: Once = Once::new();

/// Routes client logs through the test harness; `RUST_LOG=debug` shows requests.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Replays canned responses in order and records every requested URL.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
    urls: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `200 OK` with a `{code: 0, message: "OK", data}` envelope.
    pub fn with_data(self, data: Value) -> Self {
        let body = serde_json::json!({ "code": 0, "message": "OK", "data": data });
        self.with_body(body.to_string())
    }

    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.with_response(TransportResponse::ok(body))
    }

    pub fn with_response(self, response: TransportResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn last_url(&self) -> String {
        self.urls().pop().expect("no request was made")
    }

    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        self.urls.lock().unwrap().push(url.to_string());
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request: no canned response left");
        Ok(response)
    }
}

/// A mainnet client over `transport`.
pub fn client(transport: &MockTransport) -> ScanClient {
    init_tracing();
    ScanClient::with_transport(ApiConfig::mainnet(), transport.clone())
}
